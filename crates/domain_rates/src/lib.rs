//! Rates Domain - Payment Date Rate Engine
//!
//! This crate implements the rate computation behind the payment
//! acceptance calendar: a deterministic mapping from a candidate payment
//! date to a discount / due / penalty percentage relative to a due date,
//! plus the range helpers used to highlight the selected interval.
//!
//! # Schedules
//!
//! Two incompatible schedules exist and are kept as distinct strategies:
//!
//! - **Due-date-relative** (canonical): tiered discounts for early
//!   payment, a capped penalty ramp for late payment, zero on the due
//!   date itself.
//! - **Legacy threshold**: the original fixed day-of-month thresholds,
//!   retained for reproducing historical quotes.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rates::{RatePolicy, RateClass};
//!
//! let policy = RatePolicy::default(); // due day 25
//! let quote = policy.quote_for_day(20)?;
//! assert_eq!(quote.rate(), "0.5");
//! assert_eq!(quote.class(), RateClass::Discount);
//! ```
//!
//! Everything in this crate is a pure function of its inputs: no stored
//! state, no I/O, and results are computed fresh on every call.

pub mod calendar;
pub mod error;
pub mod policy;
pub mod quote;

pub use calendar::{DayCell, MonthGrid, RangeBoundary, SelectedRange};
pub use error::RateError;
pub use policy::{RatePolicy, DEFAULT_DUE_DAY};
pub use quote::{RateClass, RateQuote};
