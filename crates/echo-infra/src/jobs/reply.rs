//! Delayed AI reply.
//!
//! Each scheduled reply is a detached tokio task that sleeps, composes the
//! reply and attaches it. There is no cancellation and no retry. The task
//! only holds a weak reference to the feed, so a reply whose feed is gone by
//! the time the timer fires is dropped silently.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use echo_core::domain::PostId;
use echo_core::error::FeedError;
use echo_core::ports::{FeedStore, ReplyStrategy};

/// Schedules reply attachment after a fixed delay.
#[derive(Clone)]
pub struct ReplyScheduler {
    strategy: Arc<dyn ReplyStrategy>,
    delay: Duration,
}

impl ReplyScheduler {
    pub fn new(strategy: Arc<dyn ReplyStrategy>, delay: Duration) -> Self {
        Self { strategy, delay }
    }

    /// Mark the post as awaiting and start its reply timer.
    ///
    /// The returned handle may be dropped; the task keeps running.
    pub async fn schedule<S>(&self, store: &Arc<S>, id: PostId) -> Result<JoinHandle<()>, FeedError>
    where
        S: FeedStore + ?Sized + 'static,
    {
        store.mark_awaiting_reply(id).await?;

        let feed = Arc::downgrade(store);
        let strategy = self.strategy.clone();
        let delay = self.delay;

        tracing::debug!(post_id = %id, delay_ms = delay.as_millis() as u64, "AI reply scheduled");

        Ok(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(store) = feed.upgrade() else {
                tracing::debug!(post_id = %id, "Feed dropped before reply, discarding");
                return;
            };

            let Some(post) = store.get_post(id).await else {
                tracing::warn!(post_id = %id, "Scheduled reply for unknown post");
                return;
            };

            let text = strategy.compose(&post);
            if let Err(e) = store.attach_ai_reply(id, text).await {
                tracing::warn!(post_id = %id, error = %e, "Failed to attach AI reply");
            }
        }))
    }
}
