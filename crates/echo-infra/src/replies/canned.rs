//! Canned supportive replies keyed by emotion.

use echo_core::domain::{Emotion, Post};
use echo_core::ports::{Picker, ReplyStrategy};

use crate::picker::random_picker;

/// Number of reply templates [`CannedReplies`] chooses between.
pub const TEMPLATE_COUNT: usize = 5;

fn emotion_word(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety => "焦虑",
        Emotion::Stress => "压力",
        Emotion::Lonely => "孤独",
        Emotion::Sad => "难过",
        Emotion::Confused => "困惑",
        Emotion::Happy => "开心",
        Emotion::Other => "情绪",
    }
}

fn advice(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety => "深呼吸，给自己一些时间，焦虑会慢慢过去的。",
        Emotion::Stress => "适当的压力是正常的，试着分解任务，一步步来完成。",
        Emotion::Lonely => "孤独感很多人都会有的，试着主动与他人连接，你会发现温暖。",
        Emotion::Sad => "悲伤是正常的情绪，允许自己感受它，但也要记得照顾自己。",
        Emotion::Confused => "困惑意味着你在思考，这是成长的过程，相信自己的判断力。",
        Emotion::Happy => "开心的时候记得分享给身边的人，快乐会传染的！",
        Emotion::Other => "每一种情绪都值得被尊重和理解。",
    }
}

fn support(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety => "焦虑只是暂时的，你比想象中更强大。",
        Emotion::Stress => "压力是成长的催化剂，相信你能应对挑战。",
        Emotion::Lonely => "虽然此刻感到孤独，但请记住你并不孤单。",
        Emotion::Sad => "悲伤会过去，阳光总会再次照进心里。",
        Emotion::Confused => "困惑是成长的必经之路，答案会慢慢清晰。",
        Emotion::Happy => "保持这份快乐，让它成为你前进的动力。",
        Emotion::Other => "无论什么时候，我们都在这里陪伴你。",
    }
}

fn render(template: usize, emotion: Emotion) -> String {
    match template {
        0 => format!(
            "亲爱的同学，感受到你的{}。你的声音我听到了，在这里你可以放心倾诉。记住，每一种情绪都是正常的，重要的是学会与之相处。💙",
            emotion_word(emotion)
        ),
        1 => format!(
            "看到你的分享，我想给你一个温暖的拥抱🤗。{}的时候确实不好受，但你愿意说出来已经很勇敢了。如果需要，我可以为你推荐一些相关的资源。",
            emotion_word(emotion)
        ),
        2 => format!(
            "回声谷收到你的心声了！你的感受我完全理解。{}你并不孤单，这里有很多同学愿意倾听和支持你。",
            advice(emotion)
        ),
        3 => format!(
            "谢谢你愿意在这里分享。{}是很多人都会经历的情绪，你的坦诚很有力量。如果需要专业支持，心灵驿站有很多资源可以帮助你。",
            emotion_word(emotion)
        ),
        _ => format!(
            "你的声音，必有回响。我在这里，回声谷的每一位朋友都在这里。{}让我们一起面对，一起成长。✨",
            support(emotion)
        ),
    }
}

/// Picks one of the canned templates and fills in the post's emotion.
pub struct CannedReplies {
    picker: Picker,
}

impl CannedReplies {
    /// Random template per reply.
    pub fn random() -> Self {
        Self::with_picker(random_picker())
    }

    pub fn with_picker(picker: Picker) -> Self {
        Self { picker }
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::random()
    }
}

impl ReplyStrategy for CannedReplies {
    fn compose(&self, post: &Post) -> String {
        let template = (self.picker)(TEMPLATE_COUNT).min(TEMPLATE_COUNT - 1);
        tracing::trace!(post_id = %post.id, template, "Composing reply");
        render(template, post.emotion)
    }
}

/// Always replies with the same text.
#[derive(Debug, Clone)]
pub struct FixedReply(pub String);

impl ReplyStrategy for FixedReply {
    fn compose(&self, _post: &Post) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use echo_core::domain::{AuthorId, Category, PostId};
    use echo_core::ports::fixed_picker;

    use super::*;

    fn post(emotion: Emotion) -> Post {
        Post::new(
            PostId::new(1),
            AuthorId::generate(),
            "最近考试压力好大，心里很焦虑".into(),
            Category::Study,
            emotion,
            Utc::now(),
        )
    }

    #[test]
    fn test_first_template_names_emotion() {
        let replies = CannedReplies::with_picker(fixed_picker(0));
        let text = replies.compose(&post(Emotion::Anxiety));
        assert!(text.starts_with("亲爱的同学，感受到你的焦虑。"));
    }

    #[test]
    fn test_advice_template_uses_fallback_for_other() {
        let replies = CannedReplies::with_picker(fixed_picker(2));
        let text = replies.compose(&post(Emotion::Other));
        assert!(text.contains("每一种情绪都值得被尊重和理解。"));
    }

    #[test]
    fn test_support_template() {
        let replies = CannedReplies::with_picker(fixed_picker(4));
        let text = replies.compose(&post(Emotion::Lonely));
        assert!(text.contains("虽然此刻感到孤独，但请记住你并不孤单。"));
        assert!(text.ends_with('✨'));
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let replies = CannedReplies::with_picker(Arc::new(|_: usize| 99));
        let text = replies.compose(&post(Emotion::Happy));
        assert!(text.contains("保持这份快乐"));
    }

    #[test]
    fn test_random_replies_come_from_templates() {
        let replies = CannedReplies::random();
        let candidates: Vec<String> = (0..TEMPLATE_COUNT)
            .map(|i| render(i, Emotion::Sad))
            .collect();
        for _ in 0..20 {
            assert!(candidates.contains(&replies.compose(&post(Emotion::Sad))));
        }
    }

    #[test]
    fn test_fixed_reply() {
        let strategy = FixedReply("在这里陪你".into());
        assert_eq!(strategy.compose(&post(Emotion::Sad)), "在这里陪你");
    }
}
