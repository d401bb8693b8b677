//! Offer Domain - Payment Offers and Acceptance
//!
//! This crate models the two sides of the payment workflow that sit on
//! top of the rate engine:
//!
//! - **Offers**: a company requests payment of an amount by a due date.
//! - **Acceptance**: the recipient picks a payment date; the service
//!   quotes it, applies the rate to the offered amount, and produces a
//!   scheduled payment with a confirmation summary.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_offer::{AcceptanceService, PaymentOffer};
//!
//! let offer = PaymentOffer::new("Example Company", amount, due_date)?;
//! let payment = AcceptanceService::new().schedule(&offer, chosen_date)?;
//! println!("{}", payment.confirmation());
//! ```

pub mod acceptance;
pub mod error;
pub mod offer;

pub use acceptance::{AcceptanceService, ScheduleStatus, ScheduledPayment};
pub use error::OfferError;
pub use offer::PaymentOffer;
