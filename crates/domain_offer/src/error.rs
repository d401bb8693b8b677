//! Offer domain errors

use thiserror::Error;

use core_kernel::MoneyError;
use domain_rates::RateError;

/// Errors that can occur in the offer domain
#[derive(Debug, Error)]
pub enum OfferError {
    /// Offer created without a company name
    #[error("Company name must not be empty")]
    EmptyCompanyName,

    /// Offer amount must be strictly positive
    #[error("Offer amount must be positive, got {0}")]
    NonPositiveAmount(String),

    /// Payment already scheduled or cancelled
    #[error("Invalid schedule state: {0}")]
    InvalidScheduleState(String),

    /// Rate computation failure
    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    /// Money arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
