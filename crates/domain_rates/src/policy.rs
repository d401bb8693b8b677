//! Rate policies
//!
//! Two incompatible schedules have been in production for the acceptance
//! calendar. They are kept as distinct strategies and selected explicitly;
//! the due-date-relative schedule is the canonical default.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RateError;
use crate::quote::{RateClass, RateQuote};

/// Due day of the billing month under the default schedule
pub const DEFAULT_DUE_DAY: u32 = 25;

/// Penalty rates are capped at this percentage
const MAX_PENALTY: Decimal = dec!(2.5);

/// Strategy for converting a candidate payment date into a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schedule", rename_all = "snake_case")]
pub enum RatePolicy {
    /// Rates measured as day offsets from a fixed due day of the billing
    /// month: tiered discounts before it, a capped penalty after it.
    DueDateRelative { due_day: u32 },
    /// Historical schedule driven by fixed day-of-month thresholds,
    /// retained for reproducing past quotes. Never merged with the
    /// due-date-relative tiers.
    LegacyThreshold,
}

impl Default for RatePolicy {
    fn default() -> Self {
        RatePolicy::DueDateRelative {
            due_day: DEFAULT_DUE_DAY,
        }
    }
}

impl RatePolicy {
    /// Creates a due-date-relative policy for the given due day
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidDay`] if `due_day` is outside 1-31.
    pub fn due_date_relative(due_day: u32) -> Result<Self, RateError> {
        validate_day(due_day)?;
        Ok(RatePolicy::DueDateRelative { due_day })
    }

    /// Quotes a rate for a day of the billing month
    ///
    /// Both days refer to the same month; cross-month candidates must go
    /// through [`RatePolicy::quote_for_date`] instead.
    ///
    /// # Arguments
    ///
    /// * `day` - Candidate payment day-of-month (1-31)
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidDay`] if `day` is outside 1-31.
    pub fn quote_for_day(&self, day: u32) -> Result<RateQuote, RateError> {
        validate_day(day)?;
        Ok(match self {
            RatePolicy::DueDateRelative { due_day } => {
                due_relative_quote(i64::from(day) - i64::from(*due_day))
            }
            RatePolicy::LegacyThreshold => threshold_quote(day),
        })
    }

    /// Quotes a rate for a full calendar date
    ///
    /// The due-date-relative schedule measures the signed whole-day
    /// difference between `candidate` and `due_date`, which coincides with
    /// day-of-month arithmetic when both fall in the same month and
    /// extends naturally across month boundaries. The legacy schedule
    /// only ever looked at the candidate's day-of-month and still does.
    pub fn quote_for_date(&self, due_date: NaiveDate, candidate: NaiveDate) -> RateQuote {
        match self {
            RatePolicy::DueDateRelative { .. } => {
                due_relative_quote((candidate - due_date).num_days())
            }
            RatePolicy::LegacyThreshold => threshold_quote(candidate.day()),
        }
    }

    /// Returns the due day of month, where the schedule has one
    pub fn due_day(&self) -> Option<u32> {
        match self {
            RatePolicy::DueDateRelative { due_day } => Some(*due_day),
            RatePolicy::LegacyThreshold => None,
        }
    }
}

fn validate_day(day: u32) -> Result<(), RateError> {
    if !(1..=31).contains(&day) {
        return Err(RateError::InvalidDay { day });
    }
    Ok(())
}

/// Due-date-relative tiers over the signed day offset from the due date
///
/// Early payments earn a tiered discount that never goes below zero; late
/// payments accrue a penalty ramping over two weeks and capped at 2.5%.
fn due_relative_quote(offset_days: i64) -> RateQuote {
    if offset_days < 0 {
        let days_early = Decimal::from(-offset_days);
        let rate = if days_early >= dec!(15) {
            dec!(4.0) - (days_early - dec!(15)) * dec!(0.1)
        } else if days_early >= dec!(10) {
            dec!(3.0) - (days_early - dec!(10)) * dec!(0.2)
        } else {
            dec!(1.0) - days_early * dec!(0.1)
        };
        RateQuote::new(rate.max(Decimal::ZERO), RateClass::Discount)
    } else if offset_days == 0 {
        RateQuote::new(Decimal::ZERO, RateClass::Due)
    } else {
        let rate = if offset_days <= 7 {
            Decimal::from(offset_days) * dec!(1.5) / dec!(7)
        } else {
            let additional = Decimal::from((offset_days - 7).min(7));
            dec!(1.5) + additional / dec!(7)
        };
        RateQuote::new(rate.min(MAX_PENALTY), RateClass::Penalty)
    }
}

/// Legacy fixed-threshold tiers over the day of month
fn threshold_quote(day: u32) -> RateQuote {
    let d = Decimal::from(day);
    if day <= 10 {
        RateQuote::new(dec!(4.0) - d * dec!(0.3), RateClass::Discount)
    } else if day <= 20 {
        RateQuote::new(dec!(3.0) - (d - dec!(10)) * dec!(0.2), RateClass::Discount)
    } else if day <= 25 {
        RateQuote::new(dec!(1.0) - (d - dec!(20)) * dec!(0.2), RateClass::Discount)
    } else {
        RateQuote::new((d - dec!(25)) * dec!(0.2), RateClass::Premium)
    }
}
