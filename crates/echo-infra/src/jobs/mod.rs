//! Delayed background work.

mod reply;

pub use reply::ReplyScheduler;
