//! Broadcast bridge.
//!
//! Forwards feed events onto a tokio broadcast channel so async tasks can
//! await them. Works within a single process only.

use std::sync::Arc;

use tokio::sync::broadcast;

use echo_core::ports::{FeedEvent, FeedObserver, FeedStore, SubscriptionId};

/// Observer that republishes every event on a broadcast channel.
pub struct BroadcastObserver {
    sender: broadcast::Sender<FeedEvent>,
}

impl BroadcastObserver {
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self { sender }
    }

    /// Subscribe a new bridge to `store` and return it with its subscription.
    pub async fn attach(
        store: &dyn FeedStore,
        buffer_size: usize,
    ) -> (Arc<Self>, SubscriptionId) {
        let bridge = Arc::new(Self::new(buffer_size));
        let id = store.subscribe(bridge.clone()).await;
        (bridge, id)
    }

    pub fn receiver(&self) -> broadcast::Receiver<FeedEvent> {
        self.sender.subscribe()
    }

    /// Run `handler` for every event until the bridge is dropped.
    pub fn spawn_listener<F>(&self, name: &'static str, handler: F) -> tokio::task::JoinHandle<()>
    where
        F: Fn(FeedEvent) + Send + 'static,
    {
        let mut receiver = self.receiver();

        tokio::spawn(async move {
            tracing::info!(listener = name, "Feed listener started");

            loop {
                match receiver.recv().await {
                    Ok(event) => handler(event),
                    Err(broadcast::error::RecvError::Lagged(count)) => {
                        tracing::warn!(
                            listener = name,
                            lagged = count,
                            "Feed listener lagged behind"
                        );
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!(listener = name, "Feed channel closed");
                        break;
                    }
                }
            }
        })
    }
}

impl FeedObserver for BroadcastObserver {
    fn notify(&self, event: &FeedEvent) {
        // No receivers is fine; nobody is listening yet.
        if self.sender.send(event.clone()).is_err() {
            tracing::trace!("No receivers for feed event");
        }
    }
}
