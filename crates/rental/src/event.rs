use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use adboard_core::{AccountId, PanelId, SiteId};
use adboard_events::Event;
use adboard_inventory::RentalWindow;

/// Event: PanelRented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRented {
    pub panel_id: PanelId,
    pub site_id: SiteId,
    pub renter: AccountId,
    pub window: RentalWindow,
    /// The full amount transferred to the owner, which may exceed the
    /// computed due amount.
    pub amount_paid: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PanelReturned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelReturned {
    pub panel_id: PanelId,
    pub site_id: SiteId,
    pub renter: AccountId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalEvent {
    PanelRented(PanelRented),
    PanelReturned(PanelReturned),
}

impl Event for RentalEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RentalEvent::PanelRented(_) => "rental.panel.rented",
            RentalEvent::PanelReturned(_) => "rental.panel.returned",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RentalEvent::PanelRented(e) => e.occurred_at,
            RentalEvent::PanelReturned(e) => e.occurred_at,
        }
    }
}
