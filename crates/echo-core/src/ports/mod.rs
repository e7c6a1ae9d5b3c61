//! Ports - trait definitions the infrastructure implements.

mod feed;
mod observer;
mod reply;

pub use feed::{AuthorStats, FeedEvent, FeedStore, SubscriptionId};
pub use observer::FeedObserver;
pub use reply::{Picker, ReplyStrategy, fixed_picker};
