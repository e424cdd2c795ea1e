use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use adboard_core::{AccountId, PanelId, SiteId};
use adboard_events::Event;

/// Event: SiteAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAdded {
    pub site_id: SiteId,
    pub owner: AccountId,
    pub name: String,
    pub location: String,
    pub total_panels: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUpdated {
    pub site_id: SiteId,
    pub owner: AccountId,
    pub name: String,
    pub location: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDeleted {
    pub site_id: SiteId,
    pub owner: AccountId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PanelAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelAdded {
    pub panel_id: PanelId,
    pub site_id: SiteId,
    pub owner: AccountId,
    pub rental_price: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PanelUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelUpdated {
    pub panel_id: PanelId,
    pub site_id: SiteId,
    pub owner: AccountId,
    pub rental_price: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PanelDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDeleted {
    pub panel_id: PanelId,
    pub site_id: SiteId,
    pub owner: AccountId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    SiteAdded(SiteAdded),
    SiteUpdated(SiteUpdated),
    SiteDeleted(SiteDeleted),
    PanelAdded(PanelAdded),
    PanelUpdated(PanelUpdated),
    PanelDeleted(PanelDeleted),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::SiteAdded(_) => "inventory.site.added",
            InventoryEvent::SiteUpdated(_) => "inventory.site.updated",
            InventoryEvent::SiteDeleted(_) => "inventory.site.deleted",
            InventoryEvent::PanelAdded(_) => "inventory.panel.added",
            InventoryEvent::PanelUpdated(_) => "inventory.panel.updated",
            InventoryEvent::PanelDeleted(_) => "inventory.panel.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::SiteAdded(e) => e.occurred_at,
            InventoryEvent::SiteUpdated(e) => e.occurred_at,
            InventoryEvent::SiteDeleted(e) => e.occurred_at,
            InventoryEvent::PanelAdded(e) => e.occurred_at,
            InventoryEvent::PanelUpdated(e) => e.occurred_at,
            InventoryEvent::PanelDeleted(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_added_serializes_for_external_consumers() {
        let event = InventoryEvent::SiteAdded(SiteAdded {
            site_id: SiteId::new(1),
            owner: AccountId::new(),
            name: "Messukeskus".to_string(),
            location: "Helsinki".to_string(),
            total_panels: 2,
            occurred_at: Utc::now(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["SiteAdded"]["site_id"], 1);
        assert_eq!(json["SiteAdded"]["name"], "Messukeskus");
        assert_eq!(event.event_type(), "inventory.site.added");
    }
}
