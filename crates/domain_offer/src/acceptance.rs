//! Acceptance scheduling
//!
//! Accepting an offer means picking a payment date. The service quotes
//! that date under the configured schedule, applies the percentage to the
//! offered amount, and records the outcome as a scheduled payment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, OfferId, PaymentId};
use domain_rates::{RatePolicy, RateQuote};

use crate::error::OfferError;
use crate::offer::PaymentOffer;

/// Status of a scheduled payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// Scheduled and awaiting the payment date
    Scheduled,
    /// Cancelled before the payment date
    Cancelled,
}

/// The outcome of accepting an offer on a particular date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPayment {
    /// Unique identifier
    pub id: PaymentId,
    /// The accepted offer
    pub offer_id: OfferId,
    /// Chosen payment date
    pub payment_date: NaiveDate,
    /// The quote the date earned
    pub quote: RateQuote,
    /// Amount as offered
    pub offered_amount: Money,
    /// Amount after the rate is applied, rounded to the currency
    pub adjusted_amount: Money,
    /// Status
    pub status: ScheduleStatus,
}

impl ScheduledPayment {
    /// The summary line shown to the payer on confirmation
    pub fn confirmation(&self) -> String {
        format!(
            "Payment of {} scheduled for {} with {}",
            self.adjusted_amount, self.payment_date, self.quote
        )
    }

    /// Cancels the scheduled payment
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::InvalidScheduleState`] if already cancelled.
    pub fn cancel(&mut self) -> Result<(), OfferError> {
        if self.status == ScheduleStatus::Cancelled {
            return Err(OfferError::InvalidScheduleState(
                "payment is already cancelled".to_string(),
            ));
        }
        self.status = ScheduleStatus::Cancelled;
        Ok(())
    }
}

/// Service that turns an accepted offer into a scheduled payment
///
/// Stateless apart from its configured rate schedule; every call computes
/// its result from the arguments alone.
#[derive(Debug, Clone, Default)]
pub struct AcceptanceService {
    policy: RatePolicy,
}

impl AcceptanceService {
    /// Creates a service using the default due-date-relative schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the rate schedule
    pub fn with_policy(mut self, policy: RatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured schedule
    pub fn policy(&self) -> &RatePolicy {
        &self.policy
    }

    /// Quotes a candidate payment date against the offer's due date
    pub fn quote(&self, offer: &PaymentOffer, payment_date: NaiveDate) -> RateQuote {
        self.policy.quote_for_date(offer.due_date, payment_date)
    }

    /// Schedules payment of `offer` on `payment_date`
    ///
    /// Discounts reduce the offered amount, penalties and premiums
    /// increase it, and paying on the due date leaves it unchanged. The
    /// adjusted amount is rounded to the offer currency's decimal places.
    pub fn schedule(
        &self,
        offer: &PaymentOffer,
        payment_date: NaiveDate,
    ) -> Result<ScheduledPayment, OfferError> {
        let quote = self.quote(offer, payment_date);

        let adjustment = quote.as_rate().apply(&offer.amount);
        let adjusted = if quote.class().is_discount() {
            offer.amount.checked_sub(&adjustment)?
        } else if quote.class().is_surcharge() {
            offer.amount.checked_add(&adjustment)?
        } else {
            offer.amount
        };

        let payment = ScheduledPayment {
            id: PaymentId::new_v7(),
            offer_id: offer.id,
            payment_date,
            quote,
            offered_amount: offer.amount,
            adjusted_amount: adjusted.round_to_currency(),
            status: ScheduleStatus::Scheduled,
        };

        tracing::info!(
            payment_id = %payment.id,
            offer_id = %offer.id,
            date = %payment_date,
            rate = %payment.quote,
            amount = %payment.adjusted_amount,
            "Payment scheduled"
        );

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use domain_rates::RateClass;
    use rust_decimal_macros::dec;

    fn offer() -> PaymentOffer {
        PaymentOffer::new(
            "Example Company",
            Money::new(dec!(10000), Currency::USD),
            NaiveDate::from_ymd_opt(2025, 6, 25).unwrap(),
        )
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_payment_is_unchanged() {
        let payment = AcceptanceService::new()
            .schedule(&offer(), date(2025, 6, 25))
            .unwrap();

        assert_eq!(payment.quote.class(), RateClass::Due);
        assert_eq!(payment.adjusted_amount.amount(), dec!(10000.00));
    }

    #[test]
    fn test_discount_reduces_amount() {
        // the 20th quotes 0.5% under the default schedule
        let payment = AcceptanceService::new()
            .schedule(&offer(), date(2025, 6, 20))
            .unwrap();

        assert_eq!(payment.quote.rate(), "0.5");
        assert_eq!(payment.adjusted_amount.amount(), dec!(9950.00));
    }

    #[test]
    fn test_penalty_increases_amount() {
        // four days late quotes 0.9%
        let payment = AcceptanceService::new()
            .schedule(&offer(), date(2025, 6, 29))
            .unwrap();

        assert_eq!(payment.quote.rate(), "0.9");
        assert_eq!(payment.adjusted_amount.amount(), dec!(10090.00));
    }

    #[test]
    fn test_confirmation_embeds_quote() {
        let payment = AcceptanceService::new()
            .schedule(&offer(), date(2025, 6, 29))
            .unwrap();

        let line = payment.confirmation();
        assert!(line.contains("2025-06-29"));
        assert!(line.contains("0.9% penalty"));
    }

    #[test]
    fn test_cancel_is_single_shot() {
        let mut payment = AcceptanceService::new()
            .schedule(&offer(), date(2025, 6, 25))
            .unwrap();

        payment.cancel().unwrap();
        assert_eq!(payment.status, ScheduleStatus::Cancelled);
        assert!(payment.cancel().is_err());
    }

    #[test]
    fn test_legacy_schedule_surcharge() {
        let service =
            AcceptanceService::new().with_policy(RatePolicy::LegacyThreshold);

        // day 28 under the legacy schedule: 0.6% premium
        let payment = service.schedule(&offer(), date(2025, 6, 28)).unwrap();
        assert_eq!(payment.quote.rate(), "0.6");
        assert_eq!(payment.quote.class(), RateClass::Premium);
        assert_eq!(payment.adjusted_amount.amount(), dec!(10060.00));
    }
}
