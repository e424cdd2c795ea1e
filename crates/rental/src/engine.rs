//! Rent/return transitions over the shared [`Ledger`].

use chrono::Duration;

use adboard_core::{AccountId, DomainError, DomainResult, PanelId, SiteId};
use adboard_events::EventBus;
use adboard_inventory::{Ledger, RentalWindow};
use adboard_platform::{Clock, PaymentGateway};

use crate::event::{PanelRented, PanelReturned, RentalEvent};

/// Fixed 30-day month approximation; rental windows are not
/// calendar-accurate.
const DAYS_PER_MONTH: i64 = 30;

/// The Rental Engine: rent/return over an injected [`Ledger`], with payment
/// and clock collaborators.
pub struct RentalEngine<C, P, B> {
    clock: C,
    payments: P,
    events: B,
}

impl<C, P, B> RentalEngine<C, P, B>
where
    C: Clock,
    P: PaymentGateway,
    B: EventBus<RentalEvent>,
{
    pub fn new(clock: C, payments: P, events: B) -> Self {
        Self {
            clock,
            payments,
            events,
        }
    }

    /// Rent an available panel for `duration_months`.
    ///
    /// The caller pays `payment_amount`, which must cover `rental_price *
    /// duration_months`; the ENTIRE amount is transferred to the owner, not
    /// just the computed due amount. A failed transfer aborts the operation
    /// with no state change.
    pub fn rent_panel(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        panel_id: PanelId,
        site_id: SiteId,
        duration_months: u32,
        payment_amount: u64,
    ) -> DomainResult<()> {
        let now = self.clock.now();

        let panel = ledger.panel(panel_id).ok_or(DomainError::NotFound)?;
        if panel.site_id() != site_id {
            return Err(DomainError::mismatch(format!(
                "panel {panel_id} belongs to site {}, not {site_id}",
                panel.site_id()
            )));
        }
        if !panel.is_available() {
            return Err(DomainError::Unavailable);
        }

        let due = panel
            .rental_price()
            .checked_mul(u64::from(duration_months))
            .ok_or_else(|| DomainError::validation("rental price overflows"))?;
        if payment_amount < due {
            return Err(DomainError::InsufficientFunds {
                required: due,
                offered: payment_amount,
            });
        }

        // The window must be representable before any money moves; a panic
        // after the transfer would strand the payment with no lease recorded.
        let window_end = now
            .checked_add_signed(Duration::days(DAYS_PER_MONTH * i64::from(duration_months)))
            .ok_or_else(|| DomainError::validation("rental window exceeds representable time"))?;

        // Every precondition holds; move the money before touching state so
        // a refused transfer leaves the ledger untouched.
        self.payments.transfer(caller, ledger.owner(), payment_amount)?;

        let window = RentalWindow {
            start: now,
            end: window_end,
        };
        if let Some(panel) = ledger.panel_mut(panel_id) {
            panel.begin_lease(caller, window);
        }
        ledger.adjust_available(site_id, -1);

        tracing::info!(%panel_id, %site_id, %caller, duration_months, payment_amount, "panel rented");
        self.publish(RentalEvent::PanelRented(PanelRented {
            panel_id,
            site_id,
            renter: caller,
            window,
            amount_paid: payment_amount,
            occurred_at: now,
        }));
        Ok(())
    }

    /// Return a rented panel once its window has ended.
    ///
    /// Only the current renter may return, and only at or after the window
    /// end. There is no penalty or grace period on either side of the gate.
    pub fn return_panel(
        &self,
        ledger: &mut Ledger,
        caller: AccountId,
        panel_id: PanelId,
        site_id: SiteId,
    ) -> DomainResult<()> {
        let now = self.clock.now();

        let panel = ledger.panel(panel_id).ok_or(DomainError::NotFound)?;
        if panel.site_id() != site_id {
            return Err(DomainError::mismatch(format!(
                "panel {panel_id} belongs to site {}, not {site_id}",
                panel.site_id()
            )));
        }
        // An available panel has no renter, so nobody is authorized to
        // return it.
        let lease = panel.lease().ok_or(DomainError::Unauthorized)?;
        if lease.renter != caller {
            return Err(DomainError::Unauthorized);
        }
        if now < lease.window.end {
            return Err(DomainError::TooEarly {
                until: lease.window.end,
            });
        }

        if let Some(panel) = ledger.panel_mut(panel_id) {
            panel.end_lease();
        }
        ledger.adjust_available(site_id, 1);

        tracing::info!(%panel_id, %site_id, %caller, "panel returned");
        self.publish(RentalEvent::PanelReturned(PanelReturned {
            panel_id,
            site_id,
            renter: caller,
            occurred_at: now,
        }));
        Ok(())
    }

    fn publish(&self, event: RentalEvent) {
        // The sink is an external observer; a publish failure does not roll
        // back the committed mutation.
        if let Err(err) = self.events.publish(event) {
            tracing::warn!(?err, "failed to publish rental event");
        }
    }
}
