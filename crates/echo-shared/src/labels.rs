//! Display labels and tag colours.

use echo_core::domain::{Category, Emotion};

/// Colour used when nothing more specific applies.
pub const FALLBACK_COLOR: &str = "#D5DBDB";

pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::Study => "学业压力",
        Category::Relationship => "人际关系",
        Category::Emotion => "情感困惑",
        Category::Family => "家庭问题",
        Category::Career => "就业焦虑",
        Category::Other => "其他",
    }
}

pub fn emotion_label(emotion: Emotion) -> &'static str {
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

/// Tag colour for a post, keyed by its emotion.
pub fn emotion_color(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety | Emotion::Sad => "#E8A598",
        Emotion::Stress => "#F4B084",
        Emotion::Lonely => "#85C1E9",
        Emotion::Happy => "#4A90A4",
        Emotion::Confused | Emotion::Other => FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_label() {
        let labels: Vec<_> = Category::ALL.into_iter().map(category_label).collect();
        assert_eq!(
            labels,
            ["学业压力", "人际关系", "情感困惑", "家庭问题", "就业焦虑", "其他"]
        );
    }

    #[test]
    fn test_unmapped_values_use_fallbacks() {
        assert_eq!(emotion_label(Emotion::Other), "情绪");
        assert_eq!(emotion_color(Emotion::Other), FALLBACK_COLOR);
    }
}
