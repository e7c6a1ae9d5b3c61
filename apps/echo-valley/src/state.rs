//! Application state - the feed and everything wired to it.

use std::sync::Arc;

use echo_core::domain::{AVATAR_COLORS, Author};
use echo_core::ports::FeedStore;
use echo_infra::{
    CannedReplies, FeedService, InMemoryFeedStore, ReplyScheduler, catalog, random_picker,
};

use crate::config::AppConfig;

/// Explicitly constructed state handed to the view.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedStore>,
    pub service: FeedService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let pick = random_picker();
        let author = Author::anonymous(pick(AVATAR_COLORS.len()));
        let seed = if config.seed {
            catalog::seed_posts()
        } else {
            tracing::info!("Starting with an empty feed");
            Vec::new()
        };

        let store: Arc<dyn FeedStore> = Arc::new(InMemoryFeedStore::with_seed(
            config.feed.clone(),
            author,
            seed,
        ));
        let scheduler = ReplyScheduler::new(
            Arc::new(CannedReplies::random()),
            config.feed.reply_delay,
        );
        let service = FeedService::new(store.clone(), scheduler);

        tracing::info!(author = %store.author().id, "Application state initialized");

        Self { store, service }
    }
}
