//! Observer adapters for consumers that prefer channels over callbacks.

mod broadcast;

pub use broadcast::BroadcastObserver;
