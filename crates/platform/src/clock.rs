//! Time source boundary.
//!
//! Operations read the clock at most once, at the start of the operation, so
//! a single `now` governs every timestamp an operation produces.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Monotonic time supplied by the environment.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests (simulated time advance).
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(mut poisoned) => **poisoned.get_mut() = now,
        }
    }

    pub fn advance(&self, by: Duration) {
        match self.now.lock() {
            Ok(mut guard) => *guard = *guard + by,
            Err(mut poisoned) => {
                let guard = poisoned.get_mut();
                **guard = **guard + by;
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
