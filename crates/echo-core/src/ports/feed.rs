//! Feed port - the store the view layer reads from and writes through.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::observer::FeedObserver;
use crate::domain::{Author, AuthorId, Category, Emotion, Post, PostDraft, PostId};
use crate::error::FeedError;

/// Emitted once per successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    Submitted { id: PostId },
    Appended { ids: Vec<PostId> },
    Liked { id: PostId, likes: u64 },
    Commented { id: PostId, comments: u64 },
    AwaitingReply { id: PostId },
    ReplyAttached { id: PostId },
}

/// Handle returned by [`FeedStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Figures shown on an author's profile card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub posts: usize,
    pub likes_received: u64,
    pub comments_received: u64,
    pub replies_received: usize,
}

/// In-memory feed of posts, newest first.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// The session author new posts are attributed to.
    fn author(&self) -> &Author;

    /// Validate and prepend a new post.
    async fn submit_post(
        &self,
        content: &str,
        category: Category,
        emotion: Emotion,
    ) -> Result<Post, FeedError>;

    /// Append older posts after every existing one.
    ///
    /// Content is trimmed and checked like a submission; drafts that fail are
    /// skipped. Returns the posts actually appended.
    async fn append_posts(&self, drafts: Vec<PostDraft>) -> Vec<Post>;

    /// Increment the like count.
    async fn like_post(&self, id: PostId) -> Result<(), FeedError>;

    /// Validate a comment and increment the comment count.
    async fn add_comment(&self, id: PostId, text: &str) -> Result<(), FeedError>;

    /// Record that a reply has been scheduled for the post.
    async fn mark_awaiting_reply(&self, id: PostId) -> Result<(), FeedError>;

    /// Attach the AI reply. A post that already has one is left untouched.
    async fn attach_ai_reply(&self, id: PostId, text: String) -> Result<(), FeedError>;

    async fn get_post(&self, id: PostId) -> Option<Post>;

    /// Snapshot of the feed in display order.
    async fn list_posts(&self) -> Vec<Post>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn posts_by_author(&self, author: AuthorId) -> Vec<Post>;

    async fn author_stats(&self, author: AuthorId) -> AuthorStats;

    /// Register an observer called after every successful mutation.
    async fn subscribe(&self, observer: Arc<dyn FeedObserver>) -> SubscriptionId;

    /// Returns false if the subscription was already gone.
    async fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
