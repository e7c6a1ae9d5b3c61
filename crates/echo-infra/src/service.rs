//! Feed service - the entry point the view layer calls.
//!
//! Wraps a [`FeedStore`] and schedules the AI reply for every accepted post.

use std::sync::Arc;

use echo_core::domain::{Category, Emotion, Post, PostDraft, PostId};
use echo_core::error::FeedError;
use echo_core::ports::FeedStore;

use crate::jobs::ReplyScheduler;

#[derive(Clone)]
pub struct FeedService {
    store: Arc<dyn FeedStore>,
    scheduler: ReplyScheduler,
}

impl FeedService {
    pub fn new(store: Arc<dyn FeedStore>, scheduler: ReplyScheduler) -> Self {
        Self { store, scheduler }
    }

    pub fn store(&self) -> &Arc<dyn FeedStore> {
        &self.store
    }

    /// Publish a post and queue its AI reply.
    pub async fn submit_post(
        &self,
        content: &str,
        category: Category,
        emotion: Emotion,
    ) -> Result<Post, FeedError> {
        let post = self.store.submit_post(content, category, emotion).await?;

        if let Err(e) = self.scheduler.schedule(&self.store, post.id).await {
            tracing::warn!(post_id = %post.id, error = %e, "Could not schedule AI reply");
        }

        Ok(post)
    }

    pub async fn like_post(&self, id: PostId) -> Result<(), FeedError> {
        self.store.like_post(id).await
    }

    pub async fn add_comment(&self, id: PostId, text: &str) -> Result<(), FeedError> {
        self.store.add_comment(id, text).await
    }

    /// Page older posts in at the bottom of the feed.
    pub async fn load_more(&self, drafts: Vec<PostDraft>) -> Vec<Post> {
        self.store.append_posts(drafts).await
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        self.store.list_posts().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use echo_core::domain::{Author, ReplyStatus};
    use echo_core::ports::FeedEvent;

    use super::*;
    use crate::catalog;
    use crate::config::FeedConfig;
    use crate::feed::InMemoryFeedStore;
    use crate::notify::BroadcastObserver;
    use crate::replies::FixedReply;

    fn service() -> FeedService {
        let store = Arc::new(InMemoryFeedStore::with_seed(
            FeedConfig::default(),
            Author::anonymous(0),
            catalog::seed_posts(),
        ));
        let scheduler = ReplyScheduler::new(
            Arc::new(FixedReply("我在这里陪着你。".into())),
            Duration::from_secs(2),
        );
        FeedService::new(store, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_gets_reply_later() {
        let service = service();
        let (bridge, _) = BroadcastObserver::attach(service.store().as_ref(), 16).await;
        let mut rx = bridge.receiver();

        let post = service
            .submit_post("我觉得有点焦虑但还好", Category::Emotion, Emotion::Anxiety)
            .await
            .unwrap();

        assert_eq!(rx.recv().await.unwrap(), FeedEvent::Submitted { id: post.id });
        assert_eq!(rx.recv().await.unwrap(), FeedEvent::AwaitingReply { id: post.id });
        assert_eq!(rx.recv().await.unwrap(), FeedEvent::ReplyAttached { id: post.id });

        let first = &service.list_posts().await[0];
        assert_eq!(first.id, post.id);
        assert_eq!(first.status, ReplyStatus::Replied);
        assert_eq!(first.ai_reply.as_ref().unwrap().text, "我在这里陪着你。");
    }

    #[tokio::test]
    async fn test_rejected_submission_schedules_nothing() {
        let service = service();
        let before = service.list_posts().await.len();

        assert!(service.submit_post("短", Category::Emotion, Emotion::Sad).await.is_err());
        assert_eq!(service.list_posts().await.len(), before);
    }

    #[tokio::test]
    async fn test_load_more_appends_catalog_page() {
        let service = service();
        let seeded = service.list_posts().await;

        let more = service.load_more(catalog::more_posts()).await;
        let posts = service.list_posts().await;

        assert_eq!(more.len(), 3);
        assert_eq!(posts.len(), seeded.len() + 3);
        assert_eq!(posts[seeded.len()].id, more[0].id);
        assert!(more.iter().all(|p| p.id > seeded.last().unwrap().id));
    }

    #[tokio::test]
    async fn test_like_and_comment_delegate() {
        let service = service();
        let id = service.list_posts().await[0].id;

        service.like_post(id).await.unwrap();
        service.add_comment(id, "谢谢你的分享").await.unwrap();

        let post = service.store().get_post(id).await.unwrap();
        assert_eq!(post.likes, 46);
        assert_eq!(post.comments, 13);
    }
}
