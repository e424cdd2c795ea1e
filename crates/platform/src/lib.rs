//! `adboard-platform` — collaborator boundaries supplied by the environment.
//!
//! The domain core touches time and money only through the traits here. Each
//! trait ships with an in-memory double so the core is testable without any
//! real platform behind it.

pub mod clock;
pub mod payment;

pub use clock::{Clock, ManualClock, SystemClock};
pub use payment::{InMemoryPayments, PaymentError, PaymentGateway, Transfer};
