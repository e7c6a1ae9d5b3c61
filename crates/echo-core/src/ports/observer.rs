//! Observer port - how the view learns that the feed changed.

use super::feed::FeedEvent;

/// Receives feed events. Called synchronously after the store has released
/// its lock, so implementations may read the store again.
pub trait FeedObserver: Send + Sync {
    fn notify(&self, event: &FeedEvent);
}

impl<F> FeedObserver for F
where
    F: Fn(&FeedEvent) + Send + Sync,
{
    fn notify(&self, event: &FeedEvent) {
        self(event)
    }
}
