//! # Echo Infrastructure
//!
//! Concrete implementations of the ports defined in `echo-core`:
//! the in-memory feed, its observer bridge, canned replies, the delayed
//! reply scheduler and the fixed seed catalog.
//!
//! Everything lives in process memory and is gone on restart.

pub mod catalog;
pub mod config;
pub mod feed;
pub mod jobs;
pub mod notify;
pub mod picker;
pub mod replies;
pub mod service;

pub use config::FeedConfig;
pub use feed::InMemoryFeedStore;
pub use jobs::ReplyScheduler;
pub use notify::BroadcastObserver;
pub use picker::random_picker;
pub use replies::{CannedReplies, FixedReply};
pub use service::FeedService;
