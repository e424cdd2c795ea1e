use serde::{Deserialize, Serialize};

use adboard_core::SiteId;

/// A named location aggregating panels, with capacity bookkeeping.
///
/// `total_panels` is a declared capacity set at creation. It is never
/// validated against actual panel registrations; it only bounds the
/// availability scan (see the rental queries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    id: SiteId,
    name: String,
    location: String,
    total_panels: u64,
    /// Signed on purpose: `delete_panel` decrements without a floor check,
    /// so misuse drives this negative instead of panicking.
    available_panels: i64,
}

impl Site {
    pub(crate) fn new(id: SiteId, name: String, location: String, total_panels: u64) -> Self {
        Self {
            id,
            name,
            location,
            total_panels,
            // Tracks actual registrations, so a new site has none available
            // regardless of declared capacity.
            available_panels: 0,
        }
    }

    pub fn id(&self) -> SiteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn total_panels(&self) -> u64 {
        self.total_panels
    }

    pub fn available_panels(&self) -> i64 {
        self.available_panels
    }

    pub(crate) fn set_details(&mut self, name: String, location: String) {
        self.name = name;
        self.location = location;
    }

    pub(crate) fn adjust_available(&mut self, delta: i64) {
        self.available_panels += delta;
    }
}
