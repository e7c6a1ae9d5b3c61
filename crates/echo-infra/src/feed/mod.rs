//! Feed store implementations.

mod memory;

pub use memory::InMemoryFeedStore;
