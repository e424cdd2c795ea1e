//! `adboard-events` — event contract and pub/sub distribution.
//!
//! Mutating domain operations announce what happened through an [`EventBus`];
//! the events are consumed by external observers and are never read back by
//! the core.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
