use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use adboard_core::{AccountId, DomainError, DomainResult, PanelId, SiteId};

use crate::panel::Panel;
use crate::site::Site;

/// The whole rental state: owner identity, site registry, panel registry.
///
/// An explicit, injected value — construct one per deployment or per test.
/// Exclusive access (`&mut Ledger`) is the serialization discipline: two
/// operations cannot interleave on the same ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    owner: AccountId,
    sites: HashMap<SiteId, Site>,
    panels: HashMap<PanelId, Panel>,
}

impl Ledger {
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            sites: HashMap::new(),
            panels: HashMap::new(),
        }
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Capability check for owner-gated operations.
    pub fn ensure_owner(&self, caller: AccountId) -> DomainResult<()> {
        if caller != self.owner {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }

    pub fn site(&self, site_id: SiteId) -> Option<&Site> {
        self.sites.get(&site_id)
    }

    pub fn panel(&self, panel_id: PanelId) -> Option<&Panel> {
        self.panels.get(&panel_id)
    }

    pub fn panel_mut(&mut self, panel_id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&panel_id)
    }

    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Adjust a site's available-panel count. No floor or ceiling check;
    /// callers validate the transition. A missing site is a no-op (a panel
    /// can outlive its site — site deletion does not cascade).
    pub fn adjust_available(&mut self, site_id: SiteId, delta: i64) {
        if let Some(site) = self.sites.get_mut(&site_id) {
            site.adjust_available(delta);
        }
    }

    /// Registered panels at `site_id` currently marked available. This is the
    /// ground truth the per-site counter must agree with.
    pub fn count_available_at(&self, site_id: SiteId) -> i64 {
        self.panels
            .values()
            .filter(|panel| panel.site_id() == site_id && panel.is_available())
            .count() as i64
    }

    pub(crate) fn site_mut(&mut self, site_id: SiteId) -> Option<&mut Site> {
        self.sites.get_mut(&site_id)
    }

    pub(crate) fn insert_site(&mut self, site: Site) {
        self.sites.insert(site.id(), site);
    }

    pub(crate) fn remove_site(&mut self, site_id: SiteId) -> Option<Site> {
        self.sites.remove(&site_id)
    }

    pub(crate) fn insert_panel(&mut self, panel: Panel) {
        self.panels.insert(panel.id(), panel);
    }

    pub(crate) fn remove_panel(&mut self, panel_id: PanelId) -> Option<Panel> {
        self.panels.remove(&panel_id)
    }
}
