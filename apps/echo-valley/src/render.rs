//! Text renderer - redraws the feed whenever it changes.

use std::sync::Arc;

use chrono::Utc;

use echo_core::domain::{BoxItem, Resource, ResourceDetail, Topic};
use echo_core::ports::{FeedEvent, FeedStore};
use echo_shared::labels::category_label;
use echo_shared::{ApiResponse, Notice, NoticeLevel, PostView, StatsView};

pub struct FeedRenderer {
    store: Arc<dyn FeedStore>,
    json: bool,
}

impl FeedRenderer {
    pub fn new(store: Arc<dyn FeedStore>, json: bool) -> Self {
        Self { store, json }
    }

    /// Redraw after an event.
    pub async fn on_event(&self, event: &FeedEvent) -> anyhow::Result<()> {
        tracing::debug!(?event, "Re-rendering feed");
        self.render().await
    }

    pub async fn render(&self) -> anyhow::Result<()> {
        let views = PostView::from_posts(&self.store.list_posts().await, Utc::now());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&ApiResponse::ok(views))?);
            return Ok(());
        }

        println!("──────── 回声谷 · {} 条心声 ────────", views.len());
        for view in &views {
            println!("{}", card(view));
        }
        Ok(())
    }

    pub async fn render_stats(&self) -> anyhow::Result<()> {
        let author = self.store.author();
        let stats = self.store.author_stats(author.id).await;
        let view = StatsView::new(stats, author.echo_value, author.level.clone());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&ApiResponse::ok(view))?);
        } else {
            println!(
                "发布帖子 {} · 获得共鸣 {} · 回声值 {} · 当前等级 {}",
                view.posts, view.likes, view.echoes, view.level
            );
        }
        Ok(())
    }
}

fn card(view: &PostView) -> String {
    let mut out = format!(
        "[{}] {} · {} · {}\n  {}\n  ♥ {}  💬 {}",
        view.id,
        view.category_label,
        view.emotion_label,
        view.time_ago,
        view.content,
        view.likes,
        view.comments
    );
    match (&view.ai_reply, view.awaiting_reply) {
        (Some(reply), _) => out.push_str(&format!("\n  🤖 {reply}")),
        (None, true) => out.push_str("\n  🤖 AI正在生成温暖的回应..."),
        (None, false) => {}
    }
    out
}

pub fn notice(notice: &Notice) {
    let tag = match notice.level {
        NoticeLevel::Success => "✔",
        NoticeLevel::Error => "✘",
        NoticeLevel::Info => "ℹ",
    };
    println!("{tag} {}", notice.message);
}

pub fn topics(topics: &[Topic]) {
    println!("──────── 热门话题 ────────");
    for topic in topics {
        let hot = if topic.hot { " 🔥热门" } else { "" };
        println!(
            "{}{} ({}) 参与讨论 {} · 同类困惑 {}%",
            topic.title,
            hot,
            category_label(topic.category),
            topic.participants,
            topic.same_confusion_pct
        );
    }
}

pub fn resources(resources: &[Resource]) {
    println!("──────── 心灵驿站 ────────");
    for resource in resources {
        let detail = match &resource.detail {
            ResourceDetail::Contact(contact) => contact,
            ResourceDetail::Content(content) => content,
        };
        println!("{}: {} ({})", resource.title, resource.description, detail);
    }
}

pub fn mystery_box(item: &BoxItem) {
    println!("🎁 解忧盲盒 · {}\n  {}", item.title, item.content);
}

#[cfg(test)]
mod tests {
    use echo_core::domain::{AuthorId, Category, Emotion, Post, PostId};

    use super::*;

    #[test]
    fn test_card_shows_pending_reply() {
        let mut post = Post::new(
            PostId::new(1),
            AuthorId::generate(),
            "我觉得有点焦虑但还好".into(),
            Category::Emotion,
            Emotion::Anxiety,
            Utc::now(),
        );
        post.mark_awaiting();

        let text = card(&PostView::from_post(&post, Utc::now()));
        assert!(text.starts_with("[post_1] 情感困惑 · 焦虑 · 刚刚"));
        assert!(text.ends_with("AI正在生成温暖的回应..."));
    }
}
