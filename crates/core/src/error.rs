//! Domain error model.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is a deterministic precondition given current state —
/// nothing is transient, and nothing is retried by the core (retry policy
/// belongs to the caller).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller identity does not hold the required capability.
    #[error("unauthorized")]
    Unauthorized,

    /// A referenced site or panel does not exist.
    #[error("not found")]
    NotFound,

    /// Identifier collision on create.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// Panel/site association differs from the one supplied.
    #[error("mismatch: {0}")]
    Mismatch(String),

    /// Operation blocked by the panel's rental state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Panel is not currently rentable.
    #[error("panel unavailable")]
    Unavailable,

    /// Payment below the amount due for the requested duration.
    #[error("insufficient funds: {required} required, {offered} offered")]
    InsufficientFunds { required: u64, offered: u64 },

    /// Return attempted before the rental window has ended.
    #[error("rental has not ended (runs until {until})")]
    TooEarly { until: DateTime<Utc> },

    /// A value failed validation (e.g. overflowing price arithmetic).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The payment collaborator refused the transfer.
    #[error("payment failed: {0}")]
    Payment(String),
}

impl DomainError {
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateEntity(msg.into())
    }

    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::Mismatch(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
