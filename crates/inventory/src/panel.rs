use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use adboard_core::{AccountId, PanelId, SiteId};

/// The `[start, end)` interval during which a panel is held by its renter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// An active rental: who holds the panel, and for which window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub renter: AccountId,
    pub window: RentalWindow,
}

/// A rentable unit of inventory.
///
/// Availability is the absence of a lease: renter and rental window are
/// cleared and set together, so the panel can never carry a renter without a
/// window or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    id: PanelId,
    site_id: SiteId,
    /// Monthly price in the smallest currency unit.
    rental_price: u64,
    lease: Option<Lease>,
}

impl Panel {
    /// A freshly registered panel: available, no renter.
    pub(crate) fn new(id: PanelId, site_id: SiteId, rental_price: u64) -> Self {
        Self {
            id,
            site_id,
            rental_price,
            lease: None,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn site_id(&self) -> SiteId {
        self.site_id
    }

    pub fn rental_price(&self) -> u64 {
        self.rental_price
    }

    pub fn is_available(&self) -> bool {
        self.lease.is_none()
    }

    pub fn lease(&self) -> Option<&Lease> {
        self.lease.as_ref()
    }

    pub fn current_renter(&self) -> Option<AccountId> {
        self.lease.as_ref().map(|lease| lease.renter)
    }

    pub(crate) fn set_price(&mut self, rental_price: u64) {
        self.rental_price = rental_price;
    }

    /// Mark the panel rented. Callers validate availability first.
    pub fn begin_lease(&mut self, renter: AccountId, window: RentalWindow) {
        self.lease = Some(Lease { renter, window });
    }

    /// Clear the lease, restoring the panel to available.
    pub fn end_lease(&mut self) {
        self.lease = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn lease_lifecycle_tracks_availability() {
        let mut panel = Panel::new(PanelId::new(0), SiteId::new(1), 100);
        assert!(panel.is_available());
        assert_eq!(panel.current_renter(), None);

        let renter = AccountId::new();
        let start = Utc::now();
        panel.begin_lease(
            renter,
            RentalWindow {
                start,
                end: start + Duration::days(30),
            },
        );

        assert!(!panel.is_available());
        assert_eq!(panel.current_renter(), Some(renter));

        panel.end_lease();

        assert!(panel.is_available());
        assert_eq!(panel.current_renter(), None);
        assert_eq!(panel.lease(), None);
    }
}
