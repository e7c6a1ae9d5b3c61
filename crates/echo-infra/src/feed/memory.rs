//! In-memory feed store.
//!
//! Posts live as long as the store does. Nothing is persisted.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock, RwLockWriteGuard};

use echo_core::domain::{
    Author, AuthorId, Category, Emotion, Post, PostDraft, PostId, validate_comment,
    validate_content,
};
use echo_core::error::FeedError;
use echo_core::ports::{AuthorStats, FeedEvent, FeedObserver, FeedStore, SubscriptionId};

use crate::config::FeedConfig;

struct FeedState {
    /// Display order, newest first.
    posts: VecDeque<Post>,
    next_id: u64,
    last_stamp: Option<DateTime<Utc>>,
}

impl FeedState {
    fn new() -> Self {
        Self {
            posts: VecDeque::new(),
            next_id: 0,
            last_stamp: None,
        }
    }

    fn allocate_id(&mut self) -> PostId {
        self.next_id += 1;
        PostId::new(self.next_id)
    }

    /// Wall-clock time, never earlier than the previous stamp.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    /// Append drafts at the tail. Drafts whose content fails validation are
    /// skipped and take no id.
    fn append(&mut self, drafts: Vec<PostDraft>, min_chars: usize) -> Vec<Post> {
        let now = Utc::now();
        let mut appended = Vec::with_capacity(drafts.len());
        for mut draft in drafts {
            draft.content = match validate_content(&draft.content, min_chars) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid draft");
                    continue;
                }
            };
            let id = self.allocate_id();
            let post = draft.into_post(id, AuthorId::generate(), now);
            self.posts.push_back(post.clone());
            appended.push(post);
        }
        appended
    }

    fn find_mut(&mut self, id: PostId) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(FeedError::not_found(id))
    }
}

/// In-memory feed shared between the view and the reply scheduler.
pub struct InMemoryFeedStore {
    config: FeedConfig,
    author: Author,
    state: RwLock<FeedState>,
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn FeedObserver>)>>,
    next_subscription: AtomicU64,
    /// Taken before the state lock is released so events go out in
    /// mutation order.
    delivery: Mutex<()>,
}

impl InMemoryFeedStore {
    pub fn new(config: FeedConfig, author: Author) -> Self {
        Self::with_seed(config, author, Vec::new())
    }

    /// Create a store whose feed starts with `drafts`, in the given order.
    pub fn with_seed(config: FeedConfig, author: Author, drafts: Vec<PostDraft>) -> Self {
        let mut state = FeedState::new();
        let seeded = state.append(drafts, config.min_post_chars).len();
        if seeded > 0 {
            tracing::debug!(posts = seeded, "Feed seeded");
        }

        Self {
            config,
            author,
            state: RwLock::new(state),
            observers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            delivery: Mutex::new(()),
        }
    }

    /// Release the state lock and notify observers, keeping delivery order
    /// equal to mutation order.
    async fn publish(&self, state: RwLockWriteGuard<'_, FeedState>, event: FeedEvent) {
        let _turn = self.delivery.lock().await;
        drop(state);
        self.emit(event).await;
    }

    /// Notify observers. Must be called with no state lock held.
    async fn emit(&self, event: FeedEvent) {
        let observers: Vec<Arc<dyn FeedObserver>> = self
            .observers
            .read()
            .await
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        tracing::debug!(?event, observers = observers.len(), "Feed event");

        for observer in observers {
            observer.notify(&event);
        }
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    fn author(&self) -> &Author {
        &self.author
    }

    async fn submit_post(
        &self,
        content: &str,
        category: Category,
        emotion: Emotion,
    ) -> Result<Post, FeedError> {
        let content = validate_content(content, self.config.min_post_chars).inspect_err(|e| {
            tracing::debug!(error = %e, "Post rejected");
        })?;

        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let created_at = state.stamp();
        let post = Post::new(id, self.author.id, content, category, emotion, created_at);
        state.posts.push_front(post.clone());

        tracing::info!(
            post_id = %post.id,
            category = %category,
            emotion = %emotion,
            "Post submitted"
        );
        self.publish(state, FeedEvent::Submitted { id }).await;

        Ok(post)
    }

    async fn append_posts(&self, drafts: Vec<PostDraft>) -> Vec<Post> {
        if drafts.is_empty() {
            return Vec::new();
        }

        let mut state = self.state.write().await;
        let appended = state.append(drafts, self.config.min_post_chars);
        if appended.is_empty() {
            return appended;
        }
        let ids = appended.iter().map(|post| post.id).collect();

        tracing::debug!(count = appended.len(), "Older posts appended");
        self.publish(state, FeedEvent::Appended { ids }).await;

        appended
    }

    async fn like_post(&self, id: PostId) -> Result<(), FeedError> {
        let mut state = self.state.write().await;
        let post = state.find_mut(id)?;
        post.likes += 1;
        let likes = post.likes;

        self.publish(state, FeedEvent::Liked { id, likes }).await;
        Ok(())
    }

    async fn add_comment(&self, id: PostId, text: &str) -> Result<(), FeedError> {
        validate_comment(text, self.config.min_comment_chars)?;

        let mut state = self.state.write().await;
        let post = state.find_mut(id)?;
        post.comments += 1;
        let comments = post.comments;

        tracing::debug!(post_id = %id, comments, "Comment added");
        self.publish(state, FeedEvent::Commented { id, comments }).await;
        Ok(())
    }

    async fn mark_awaiting_reply(&self, id: PostId) -> Result<(), FeedError> {
        let mut state = self.state.write().await;
        let changed = state.find_mut(id)?.mark_awaiting();

        if changed {
            self.publish(state, FeedEvent::AwaitingReply { id }).await;
        } else {
            tracing::debug!(post_id = %id, "Post not in created state, left as is");
        }
        Ok(())
    }

    async fn attach_ai_reply(&self, id: PostId, text: String) -> Result<(), FeedError> {
        let mut state = self.state.write().await;
        let attached = state.find_mut(id)?.attach_reply(text, Utc::now());

        if attached {
            tracing::info!(post_id = %id, "AI reply attached");
            self.publish(state, FeedEvent::ReplyAttached { id }).await;
        } else {
            tracing::debug!(post_id = %id, "Post already has a reply");
        }
        Ok(())
    }

    async fn get_post(&self, id: PostId) -> Option<Post> {
        let state = self.state.read().await;
        state.posts.iter().find(|post| post.id == id).cloned()
    }

    async fn list_posts(&self) -> Vec<Post> {
        self.state.read().await.posts.iter().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.state.read().await.posts.len()
    }

    async fn posts_by_author(&self, author: AuthorId) -> Vec<Post> {
        let state = self.state.read().await;
        state
            .posts
            .iter()
            .filter(|post| post.author_id == author)
            .cloned()
            .collect()
    }

    async fn author_stats(&self, author: AuthorId) -> AuthorStats {
        let state = self.state.read().await;
        state
            .posts
            .iter()
            .filter(|post| post.author_id == author)
            .fold(AuthorStats::default(), |mut stats, post| {
                stats.posts += 1;
                stats.likes_received += post.likes;
                stats.comments_received += post.comments;
                if post.is_replied() {
                    stats.replies_received += 1;
                }
                stats
            })
    }

    async fn subscribe(&self, observer: Arc<dyn FeedObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers.write().await.push((id, observer));
        tracing::debug!(subscription = id.0, "Observer subscribed");
        id
    }

    async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write().await;
        let before = observers.len();
        observers.retain(|(sub, _)| *sub != id);
        let removed = observers.len() < before;
        if removed {
            tracing::debug!(subscription = id.0, "Observer unsubscribed");
        }
        removed
    }
}
