//! Core Kernel - Foundational types for the payment workflow
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Percentage rates and their application to amounts
//! - Common identifiers and value objects

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{OfferId, PaymentId};
pub use money::{Currency, Money, MoneyError, Rate};
