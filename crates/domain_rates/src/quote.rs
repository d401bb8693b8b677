//! Rate quotes and their fixed-point presentation
//!
//! A quote pairs a percentage with the tier that produced it. The rendered
//! figure is always a non-negative decimal with exactly one fractional
//! digit, rounded half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Rate;

/// The tier that produced a quoted rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateClass {
    /// Payment before the due date
    Discount,
    /// Payment exactly on the due date
    Due,
    /// Payment after the due date (due-date-relative schedule)
    Penalty,
    /// Payment after the due date (legacy threshold schedule)
    Premium,
}

impl RateClass {
    /// Returns true for the tiers that reduce the amount owed
    pub fn is_discount(&self) -> bool {
        matches!(self, RateClass::Discount)
    }

    /// Returns true for the tiers that increase the amount owed
    pub fn is_surcharge(&self) -> bool {
        matches!(self, RateClass::Penalty | RateClass::Premium)
    }
}

impl fmt::Display for RateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RateClass::Discount => "discount",
            RateClass::Due => "due",
            RateClass::Penalty => "penalty",
            RateClass::Premium => "premium",
        };
        write!(f, "{}", label)
    }
}

/// A quoted percentage rate for a candidate payment date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Percentage rendered with exactly one fractional digit
    rate: String,
    /// The same percentage as a decimal, rounded to one place
    value: Decimal,
    /// Tier classification
    class: RateClass,
}

impl RateQuote {
    /// Creates a quote from a raw percentage
    ///
    /// The value is rounded to one decimal place (half away from zero)
    /// before being rendered. A zero result always prints as "0.0",
    /// regardless of the sign of the input.
    pub fn new(value: Decimal, class: RateClass) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        Self {
            rate: format!("{:.1}", rounded),
            value: rounded,
            class,
        }
    }

    /// Returns the rendered percentage, e.g. "2.5"
    pub fn rate(&self) -> &str {
        &self.rate
    }

    /// Returns the rounded percentage as a decimal
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the tier classification
    pub fn class(&self) -> RateClass {
        self.class
    }

    /// Converts the quoted percentage into an applicable [`Rate`]
    pub fn as_rate(&self) -> Rate {
        Rate::from_percentage(self.value)
    }
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}", self.rate, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_renders_one_fractional_digit() {
        let quote = RateQuote::new(dec!(4), RateClass::Discount);
        assert_eq!(quote.rate(), "4.0");

        let quote = RateQuote::new(dec!(0.5), RateClass::Discount);
        assert_eq!(quote.rate(), "0.5");
    }

    #[test]
    fn test_quote_rounds_half_away_from_zero() {
        // 0.857142... rounds up at one decimal
        let quote = RateQuote::new(dec!(6) / dec!(7), RateClass::Penalty);
        assert_eq!(quote.rate(), "0.9");

        // exact midpoint rounds away from zero
        let quote = RateQuote::new(dec!(0.25), RateClass::Penalty);
        assert_eq!(quote.rate(), "0.3");
    }

    #[test]
    fn test_quote_never_renders_negative_zero() {
        let quote = RateQuote::new(dec!(-0.0), RateClass::Discount);
        assert_eq!(quote.rate(), "0.0");

        let quote = RateQuote::new(dec!(-0.04), RateClass::Discount);
        assert_eq!(quote.rate(), "0.0");
    }

    #[test]
    fn test_quote_display() {
        let quote = RateQuote::new(dec!(1.5), RateClass::Penalty);
        assert_eq!(quote.to_string(), "1.5% penalty");
    }

    #[test]
    fn test_quote_as_rate_applies_percentage() {
        use core_kernel::{Currency, Money};

        let quote = RateQuote::new(dec!(2.5), RateClass::Penalty);
        let charge = quote.as_rate().apply(&Money::new(dec!(1000), Currency::USD));
        assert_eq!(charge.amount(), dec!(25));
    }

    #[test]
    fn test_class_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RateClass::Discount).unwrap(),
            "\"discount\""
        );
        assert_eq!(serde_json::to_string(&RateClass::Due).unwrap(), "\"due\"");
    }
}
