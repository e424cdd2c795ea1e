//! `adboard-rental` — the rent/return state machine and read-only queries.
//!
//! A panel moves **Available → Rented** through [`RentalEngine::rent_panel`]
//! and back through [`RentalEngine::return_panel`], which is gated on the
//! rental window having ended. No other transitions exist.

pub mod engine;
pub mod event;
pub mod query;

pub use engine::RentalEngine;
pub use event::{PanelRented, PanelReturned, RentalEvent};
pub use query::{
    SiteDetails, available_panels_at_site, check_availability, current_renter, rental_price,
    site_details,
};
