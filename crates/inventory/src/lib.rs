//! `adboard-inventory` — sites, panels, and their administrative lifecycle.
//!
//! Owns the [`Ledger`] state struct shared with the rental engine, and the
//! invariant that a site's available-panel count tracks the panels actually
//! marked available at that site.

pub mod event;
pub mod ledger;
pub mod manager;
pub mod panel;
pub mod site;

pub use event::{
    InventoryEvent, PanelAdded, PanelDeleted, PanelUpdated, SiteAdded, SiteDeleted, SiteUpdated,
};
pub use ledger::Ledger;
pub use manager::InventoryManager;
pub use panel::{Lease, Panel, RentalWindow};
pub use site::Site;
