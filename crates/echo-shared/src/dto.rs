//! View models - what a renderer needs to draw the feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use echo_core::domain::{Post, ReplyStatus};
use echo_core::ports::AuthorStats;

use crate::labels::{category_label, emotion_color, emotion_label};
use crate::time::time_ago;

/// One post card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: String,
    pub content: String,
    pub category: String,
    pub category_label: String,
    pub emotion: String,
    pub emotion_label: String,
    pub tag_color: String,
    pub time_ago: String,
    pub likes: u64,
    pub comments: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_reply: Option<String>,
    /// True while the reply is being "written".
    pub awaiting_reply: bool,
}

impl PostView {
    pub fn from_post(post: &Post, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id.to_string(),
            content: post.content.clone(),
            category: post.category.to_string(),
            category_label: category_label(post.category).to_string(),
            emotion: post.emotion.to_string(),
            emotion_label: emotion_label(post.emotion).to_string(),
            tag_color: emotion_color(post.emotion).to_string(),
            time_ago: time_ago(post.created_at, now),
            likes: post.likes,
            comments: post.comments,
            ai_reply: post.ai_reply.as_ref().map(|reply| reply.text.clone()),
            awaiting_reply: post.status == ReplyStatus::Awaiting,
        }
    }

    pub fn from_posts(posts: &[Post], now: DateTime<Utc>) -> Vec<Self> {
        posts.iter().map(|post| Self::from_post(post, now)).collect()
    }
}

/// Profile card figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsView {
    pub posts: usize,
    pub likes: u64,
    pub echoes: u32,
    pub level: String,
}

impl StatsView {
    pub fn new(stats: AuthorStats, echo_value: u32, level: impl Into<String>) -> Self {
        Self {
            posts: stats.posts,
            likes: stats.likes_received,
            echoes: echo_value,
            level: level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use echo_core::domain::{AuthorId, Category, Emotion, PostId};

    use super::*;

    #[test]
    fn test_view_of_fresh_post() {
        let now = Utc::now();
        let mut post = Post::new(
            PostId::new(6),
            AuthorId::generate(),
            "我觉得有点焦虑但还好".into(),
            Category::Emotion,
            Emotion::Anxiety,
            now - Duration::minutes(3),
        );
        post.mark_awaiting();

        let view = PostView::from_post(&post, now);
        assert_eq!(view.id, "post_6");
        assert_eq!(view.category_label, "情感困惑");
        assert_eq!(view.emotion_label, "焦虑");
        assert_eq!(view.tag_color, "#E8A598");
        assert_eq!(view.time_ago, "3分钟前");
        assert!(view.awaiting_reply);
        assert!(view.ai_reply.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("ai_reply").is_none());
        assert_eq!(json["category"], "emotion");
    }

    #[test]
    fn test_stats_view() {
        let stats = AuthorStats {
            posts: 2,
            likes_received: 9,
            comments_received: 1,
            replies_received: 2,
        };
        let view = StatsView::new(stats, 0, "新声");
        assert_eq!(view.posts, 2);
        assert_eq!(view.likes, 9);
        assert_eq!(view.level, "新声");
    }
}
