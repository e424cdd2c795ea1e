//! Property tests: the per-site availability counter must agree with the
//! panels actually registered and available, after every operation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use proptest::prelude::*;

use adboard_core::{AccountId, PanelId, SiteId};
use adboard_events::InMemoryEventBus;
use adboard_inventory::{InventoryManager, Ledger};
use adboard_platform::{InMemoryPayments, ManualClock};
use adboard_rental::RentalEngine;

#[derive(Debug, Clone)]
enum Op {
    AddPanel(u64),
    DeletePanel(u64),
    Rent(u64),
    Return(u64),
    AdvanceClock,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 0u64..6;
    prop_oneof![
        id.clone().prop_map(Op::AddPanel),
        id.clone().prop_map(Op::DeletePanel),
        id.clone().prop_map(Op::Rent),
        id.prop_map(Op::Return),
        Just(Op::AdvanceClock),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: after any sequence of add/delete/rent/return, every site's
    /// `available_panels` equals the number of its registered panels that
    /// are currently available.
    #[test]
    fn availability_counter_matches_registered_panels(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let owner = AccountId::new();
        let renter = AccountId::new();
        let site_id = SiteId::new(1);

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let payments = Arc::new(InMemoryPayments::new());
        payments.credit(renter, u64::MAX / 2);

        let manager = InventoryManager::new(clock.clone(), Arc::new(InMemoryEventBus::new()));
        let engine = RentalEngine::new(clock.clone(), payments, Arc::new(InMemoryEventBus::new()));

        let mut ledger = Ledger::new(owner);
        manager.add_site(&mut ledger, owner, site_id, "Messukeskus", "Helsinki", 6).unwrap();

        for op in ops {
            // Individual operations may fail their preconditions; failures
            // must leave the invariant intact, so the outcome is ignored.
            match op {
                Op::AddPanel(id) => {
                    let _ = manager.add_panel(&mut ledger, owner, PanelId::new(id), site_id, 100);
                }
                Op::DeletePanel(id) => {
                    let _ = manager.delete_panel(&mut ledger, owner, PanelId::new(id), site_id);
                }
                Op::Rent(id) => {
                    let _ = engine.rent_panel(&mut ledger, renter, PanelId::new(id), site_id, 1, 100);
                }
                Op::Return(id) => {
                    let _ = engine.return_panel(&mut ledger, renter, PanelId::new(id), site_id);
                }
                Op::AdvanceClock => {
                    clock.advance(Duration::days(30));
                }
            }

            let site = ledger.site(site_id).unwrap();
            prop_assert_eq!(site.available_panels(), ledger.count_available_at(site_id));
        }
    }
}
