use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::author::AuthorId;
use super::taxonomy::{Category, Emotion};
use crate::error::ValidationError;

/// Minimum trimmed length of a post body.
pub const MIN_POST_CHARS: usize = 10;

/// Minimum trimmed length of a comment.
pub const MIN_COMMENT_CHARS: usize = 5;

/// Post identifier, allocated in generation order by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// Where a post is in its AI reply lifecycle.
///
/// `Created -> Awaiting -> Replied`, or `Created -> Replied` directly.
/// There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Created,
    Awaiting,
    Replied,
}

/// Supportive reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiReply {
    pub text: String,
    pub attached_at: DateTime<Utc>,
}

/// Post entity - one anonymous share in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: AuthorId,
    pub content: String,
    pub category: Category,
    pub emotion: Emotion,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub comments: u64,
    pub ai_reply: Option<AiReply>,
    pub status: ReplyStatus,
}

impl Post {
    /// Create a new post with zero counts and no reply.
    ///
    /// `content` is expected to have passed [`validate_content`].
    pub fn new(
        id: PostId,
        author_id: AuthorId,
        content: String,
        category: Category,
        emotion: Emotion,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            content,
            category,
            emotion,
            created_at,
            likes: 0,
            comments: 0,
            ai_reply: None,
            status: ReplyStatus::Created,
        }
    }

    pub fn is_replied(&self) -> bool {
        self.ai_reply.is_some()
    }

    /// `Created -> Awaiting`. Returns false in any other state.
    pub fn mark_awaiting(&mut self) -> bool {
        if self.status != ReplyStatus::Created {
            return false;
        }
        self.status = ReplyStatus::Awaiting;
        true
    }

    /// Attach a reply once. Later calls leave the first reply untouched
    /// and return false.
    pub fn attach_reply(&mut self, text: String, at: DateTime<Utc>) -> bool {
        if self.ai_reply.is_some() {
            return false;
        }
        self.ai_reply = Some(AiReply {
            text,
            attached_at: at,
        });
        self.status = ReplyStatus::Replied;
        true
    }
}

/// Post contents without identity, used to seed or page in older posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub content: String,
    pub category: Category,
    pub emotion: Emotion,
    pub likes: u64,
    pub comments: u64,
    pub ai_reply: Option<String>,
    /// How long before materialization the post was written.
    pub age_minutes: u32,
}

impl PostDraft {
    pub fn new(content: impl Into<String>, category: Category, emotion: Emotion) -> Self {
        Self {
            content: content.into(),
            category,
            emotion,
            likes: 0,
            comments: 0,
            ai_reply: None,
            age_minutes: 0,
        }
    }

    pub fn aged_hours(mut self, hours: u32) -> Self {
        self.age_minutes = hours.saturating_mul(60);
        self
    }

    pub fn with_counts(mut self, likes: u64, comments: u64) -> Self {
        self.likes = likes;
        self.comments = comments;
        self
    }

    pub fn with_reply(mut self, text: impl Into<String>) -> Self {
        self.ai_reply = Some(text.into());
        self
    }

    /// Materialize the draft under a feed-allocated id, dated `age_minutes`
    /// before `now`.
    pub fn into_post(self, id: PostId, author_id: AuthorId, now: DateTime<Utc>) -> Post {
        let created_at = now - Duration::minutes(i64::from(self.age_minutes));
        let mut post = Post::new(
            id,
            author_id,
            self.content,
            self.category,
            self.emotion,
            created_at,
        );
        post.likes = self.likes;
        post.comments = self.comments;
        if let Some(text) = self.ai_reply {
            post.attach_reply(text, created_at);
        }
        post
    }
}

/// Length as the user sees it: Unicode scalar values, after trimming.
pub fn visible_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Check a post body and return it trimmed.
pub fn validate_content(content: &str, min: usize) -> Result<String, ValidationError> {
    let actual = visible_len(content);
    if actual < min {
        return Err(ValidationError::ContentTooShort { min, actual });
    }
    Ok(content.trim().to_string())
}

/// Check a comment body and return it trimmed.
pub fn validate_comment(text: &str, min: usize) -> Result<String, ValidationError> {
    let actual = visible_len(text);
    if actual < min {
        return Err(ValidationError::CommentTooShort { min, actual });
    }
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            PostId::new(1),
            AuthorId::generate(),
            "最近考试压力好大，感觉自己快要撑不下去了".into(),
            Category::Study,
            Emotion::Anxiety,
            Utc::now(),
        )
    }

    #[test]
    fn test_counts_multibyte_as_chars() {
        assert_eq!(visible_len("我觉得有点焦虑但还好"), 10);
        assert_eq!(visible_len("  好的呢 \n"), 3);
        assert_eq!(visible_len(""), 0);
    }

    #[test]
    fn test_validate_content_trims() {
        let content = validate_content("  我觉得有点焦虑但还好  ", MIN_POST_CHARS).unwrap();
        assert_eq!(content, "我觉得有点焦虑但还好");
    }

    #[test]
    fn test_validate_content_rejects_nine_chars() {
        let err = validate_content("123456789", MIN_POST_CHARS).unwrap_err();
        assert_eq!(err, ValidationError::ContentTooShort { min: 10, actual: 9 });
        assert!(validate_content("   ", MIN_POST_CHARS).is_err());
    }

    #[test]
    fn test_validate_comment_boundary() {
        assert!(validate_comment("好的呢", MIN_COMMENT_CHARS).is_err());
        assert!(validate_comment("1234", MIN_COMMENT_CHARS).is_err());
        assert_eq!(validate_comment(" 12345 ", MIN_COMMENT_CHARS).unwrap(), "12345");
    }

    #[test]
    fn test_reply_attaches_once() {
        let mut post = sample();
        assert!(post.attach_reply("first".into(), Utc::now()));
        assert!(!post.attach_reply("second".into(), Utc::now()));
        assert_eq!(post.ai_reply.unwrap().text, "first");
        assert_eq!(post.status, ReplyStatus::Replied);
    }

    #[test]
    fn test_awaiting_only_from_created() {
        let mut post = sample();
        assert!(post.mark_awaiting());
        assert!(!post.mark_awaiting());
        post.attach_reply("done".into(), Utc::now());
        assert!(!post.mark_awaiting());
        assert_eq!(post.status, ReplyStatus::Replied);
    }

    #[test]
    fn test_draft_with_reply_is_replied() {
        let post = PostDraft::new("家里最近出了点事情", Category::Family, Emotion::Confused)
            .with_counts(28, 15)
            .with_reply("保持联系")
            .into_post(PostId::new(4), AuthorId::generate(), Utc::now());
        assert_eq!(post.likes, 28);
        assert_eq!(post.comments, 15);
        assert_eq!(post.status, ReplyStatus::Replied);
    }

    #[test]
    fn test_draft_age_backdates_post() {
        let now = Utc::now();
        let post = PostDraft::new("大四了，面临着找工作的压力", Category::Career, Emotion::Anxiety)
            .aged_hours(24)
            .into_post(PostId::new(5), AuthorId::generate(), now);
        assert_eq!(now - post.created_at, Duration::hours(24));
        assert_eq!(post.status, ReplyStatus::Created);
    }

    #[test]
    fn test_draft_age_saturates() {
        let draft = PostDraft::new("很久很久以前写下的帖子", Category::Other, Emotion::Other)
            .aged_hours(u32::MAX);
        assert_eq!(draft.age_minutes, u32::MAX);
    }
}
