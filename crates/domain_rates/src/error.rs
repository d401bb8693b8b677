//! Rates domain errors

use thiserror::Error;

/// Errors that can occur in the rates domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    /// Day-of-month outside calendar bounds
    #[error("Invalid day of month: {day} (expected 1-31)")]
    InvalidDay { day: u32 },

    /// Year/month pair that does not name a real calendar month
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}
