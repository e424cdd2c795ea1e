//! Administrative lifecycle of sites and panels.
//!
//! Every operation is owner-gated, validates all of its preconditions before
//! touching any field, and emits exactly one event on success.

use adboard_core::{AccountId, DomainError, DomainResult, PanelId, SiteId};
use adboard_events::EventBus;
use adboard_platform::Clock;

use crate::event::{
    InventoryEvent, PanelAdded, PanelDeleted, PanelUpdated, SiteAdded, SiteDeleted, SiteUpdated,
};
use crate::ledger::Ledger;
use crate::panel::Panel;
use crate::site::Site;

/// The Inventory Manager: site/panel CRUD over an injected [`Ledger`].
pub struct InventoryManager<C, B> {
    clock: C,
    events: B,
}

impl<C, B> InventoryManager<C, B>
where
    C: Clock,
    B: EventBus<InventoryEvent>,
{
    pub fn new(clock: C, events: B) -> Self {
        Self { clock, events }
    }

    /// Register a site with a declared capacity.
    ///
    /// `total_panels` is taken at face value — it is not reconciled against
    /// panel registrations, then or later.
    pub fn add_site(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        site_id: SiteId,
        name: impl Into<String>,
        location: impl Into<String>,
        total_panels: u64,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        if ledger.site(site_id).is_some() {
            return Err(DomainError::duplicate(format!(
                "site {site_id} already registered"
            )));
        }

        let now = self.clock.now();
        let name = name.into();
        let location = location.into();

        ledger.insert_site(Site::new(site_id, name.clone(), location.clone(), total_panels));

        tracing::info!(%site_id, total_panels, "site added");
        self.publish(InventoryEvent::SiteAdded(SiteAdded {
            site_id,
            owner: caller,
            name,
            location,
            total_panels,
            occurred_at: now,
        }));
        Ok(())
    }

    /// Update a site's display fields. Counts are untouched.
    pub fn update_site(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        site_id: SiteId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        let site = ledger.site_mut(site_id).ok_or(DomainError::NotFound)?;

        let name = name.into();
        let location = location.into();
        site.set_details(name.clone(), location.clone());

        tracing::info!(%site_id, "site updated");
        self.publish(InventoryEvent::SiteUpdated(SiteUpdated {
            site_id,
            owner: caller,
            name,
            location,
            occurred_at: self.clock.now(),
        }));
        Ok(())
    }

    /// Remove a site record.
    ///
    /// Blocked while any panel recorded at the site is rented. Panels are NOT
    /// cascaded: records at a deleted site survive as orphans, reachable by
    /// panel id but invisible to site-keyed queries.
    pub fn delete_site(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        site_id: SiteId,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        if ledger.site(site_id).is_none() {
            return Err(DomainError::NotFound);
        }
        let rented = ledger
            .panels()
            .any(|panel| panel.site_id() == site_id && !panel.is_available());
        if rented {
            return Err(DomainError::conflict(format!(
                "site {site_id} has rented panels"
            )));
        }

        ledger.remove_site(site_id);

        tracing::info!(%site_id, "site deleted");
        self.publish(InventoryEvent::SiteDeleted(SiteDeleted {
            site_id,
            owner: caller,
            occurred_at: self.clock.now(),
        }));
        Ok(())
    }

    /// Register a panel at an existing site.
    ///
    /// The collision check inspects only the availability flag, mirroring the
    /// source system: a previously deleted panel id is freely reusable, and
    /// only an *available* record with the same id collides.
    pub fn add_panel(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        panel_id: PanelId,
        site_id: SiteId,
        rental_price: u64,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        if ledger.site(site_id).is_none() {
            return Err(DomainError::NotFound);
        }
        if ledger.panel(panel_id).is_some_and(Panel::is_available) {
            return Err(DomainError::duplicate(format!(
                "panel {panel_id} already registered"
            )));
        }

        ledger.insert_panel(Panel::new(panel_id, site_id, rental_price));
        ledger.adjust_available(site_id, 1);

        tracing::info!(%panel_id, %site_id, rental_price, "panel added");
        self.publish(InventoryEvent::PanelAdded(PanelAdded {
            panel_id,
            site_id,
            owner: caller,
            rental_price,
            occurred_at: self.clock.now(),
        }));
        Ok(())
    }

    /// Re-price an available panel.
    pub fn update_panel(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        panel_id: PanelId,
        site_id: SiteId,
        rental_price: u64,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        Self::ensure_panel_administrable(ledger, panel_id, site_id)?;

        if let Some(panel) = ledger.panel_mut(panel_id) {
            panel.set_price(rental_price);
        }

        tracing::info!(%panel_id, %site_id, rental_price, "panel updated");
        self.publish(InventoryEvent::PanelUpdated(PanelUpdated {
            panel_id,
            site_id,
            owner: caller,
            rental_price,
            occurred_at: self.clock.now(),
        }));
        Ok(())
    }

    /// Remove an available panel and decrement the site's count.
    ///
    /// No floor check on the count: deleting a panel whose site counter is
    /// already spent drives the counter negative rather than panicking.
    pub fn delete_panel(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        panel_id: PanelId,
        site_id: SiteId,
    ) -> DomainResult<()> {
        ledger.ensure_owner(caller)?;
        Self::ensure_panel_administrable(ledger, panel_id, site_id)?;

        ledger.remove_panel(panel_id);
        ledger.adjust_available(site_id, -1);

        tracing::info!(%panel_id, %site_id, "panel deleted");
        self.publish(InventoryEvent::PanelDeleted(PanelDeleted {
            panel_id,
            site_id,
            owner: caller,
            occurred_at: self.clock.now(),
        }));
        Ok(())
    }

    /// Shared preconditions for panel update/delete: site exists, panel
    /// exists, panel is not rented, panel actually belongs to `site_id`.
    ///
    /// The rental-state check runs independently of (and in addition to) the
    /// owner check: even the owner cannot touch a rented panel.
    fn ensure_panel_administrable(
        ledger: &Ledger,
        panel_id: PanelId,
        site_id: SiteId,
    ) -> DomainResult<()> {
        if ledger.site(site_id).is_none() {
            return Err(DomainError::NotFound);
        }
        let panel = ledger.panel(panel_id).ok_or(DomainError::NotFound)?;
        if !panel.is_available() {
            return Err(DomainError::conflict(format!(
                "panel {panel_id} is currently rented"
            )));
        }
        if panel.site_id() != site_id {
            return Err(DomainError::mismatch(format!(
                "panel {panel_id} belongs to site {}, not {site_id}",
                panel.site_id()
            )));
        }
        Ok(())
    }

    fn publish(&self, event: InventoryEvent) {
        // The sink is an external observer; a publish failure does not roll
        // back the committed mutation.
        if let Err(err) = self.events.publish(event) {
            tracing::warn!(?err, "failed to publish inventory event");
        }
    }
}
