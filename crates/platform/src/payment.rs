//! Value-transfer boundary.
//!
//! Invoked only inside `rent_panel`; a failed transfer aborts the whole
//! operation, so the gateway runs after every precondition and before any
//! state mutation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use adboard_core::{AccountId, DomainError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payer cannot cover the requested amount.
    #[error("insufficient balance: {required} required, {available} available")]
    InsufficientBalance { required: u64, available: u64 },

    /// The rail refused the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

impl From<PaymentError> for DomainError {
    fn from(value: PaymentError) -> Self {
        DomainError::payment(value.to_string())
    }
}

/// Moves funds between external accounts.
pub trait PaymentGateway: Send + Sync {
    fn transfer(&self, from: AccountId, to: AccountId, amount: u64) -> Result<(), PaymentError>;
}

impl<P> PaymentGateway for Arc<P>
where
    P: PaymentGateway + ?Sized,
{
    fn transfer(&self, from: AccountId, to: AccountId, amount: u64) -> Result<(), PaymentError> {
        (**self).transfer(from, to, amount)
    }
}

/// A completed transfer, as recorded by [`InMemoryPayments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: u64,
}

#[derive(Debug, Default)]
struct PaymentsInner {
    balances: HashMap<AccountId, u64>,
    transfers: Vec<Transfer>,
}

/// In-memory payment rail for tests/dev.
///
/// Accounts start at zero; credit them before renting. Every successful
/// transfer is appended to a log for assertions.
#[derive(Debug, Default)]
pub struct InMemoryPayments {
    inner: Mutex<PaymentsInner>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PaymentsInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn credit(&self, account: AccountId, amount: u64) {
        let mut inner = self.lock();
        let balance = inner.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, account: AccountId) -> u64 {
        self.lock().balances.get(&account).copied().unwrap_or(0)
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.lock().transfers.clone()
    }
}

impl PaymentGateway for InMemoryPayments {
    fn transfer(&self, from: AccountId, to: AccountId, amount: u64) -> Result<(), PaymentError> {
        let mut inner = self.lock();

        let available = inner.balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(PaymentError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        inner.balances.insert(from, available - amount);
        let credited = inner.balances.entry(to).or_default();
        *credited = credited.saturating_add(amount);
        inner.transfers.push(Transfer { from, to, amount });

        Ok(())
    }
}
