//! Payment offers
//!
//! An offer is the request one party sends another: a company name, an
//! amount owed, and the due date that anchors the rate schedule.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, OfferId};

use crate::error::OfferError;

/// A payment offer awaiting acceptance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOffer {
    /// Unique identifier
    pub id: OfferId,
    /// The company requesting payment
    pub company_name: String,
    /// Amount owed
    pub amount: Money,
    /// Due date anchoring the rate schedule
    pub due_date: NaiveDate,
    /// Free-form notes shown to the recipient
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl PaymentOffer {
    /// Creates a new offer
    ///
    /// # Arguments
    ///
    /// * `company_name` - The requesting company
    /// * `amount` - Amount owed; must be strictly positive
    /// * `due_date` - Date at which the rate is zero
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::EmptyCompanyName`] or
    /// [`OfferError::NonPositiveAmount`] when validation fails.
    pub fn new(
        company_name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
    ) -> Result<Self, OfferError> {
        let company_name = company_name.into();
        if company_name.trim().is_empty() {
            return Err(OfferError::EmptyCompanyName);
        }
        if !amount.is_positive() {
            return Err(OfferError::NonPositiveAmount(amount.to_string()));
        }

        Ok(Self {
            id: OfferId::new_v7(),
            company_name,
            amount,
            due_date,
            notes: None,
            created_at: Utc::now(),
        })
    }

    /// Attaches notes for the recipient
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Day-of-month of the due date
    pub fn due_day(&self) -> u32 {
        self.due_date.day()
    }
}
