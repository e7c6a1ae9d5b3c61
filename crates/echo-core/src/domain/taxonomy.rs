//! Post categories and emotions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Relationship,
    Emotion,
    Family,
    Career,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Study,
        Category::Relationship,
        Category::Emotion,
        Category::Family,
        Category::Career,
        Category::Other,
    ];

    /// Parse a form value. Unknown names fall back to `Other`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "study" => Self::Study,
            "relationship" => Self::Relationship,
            "emotion" => Self::Emotion,
            "family" => Self::Family,
            "career" => Self::Career,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Relationship => "relationship",
            Self::Emotion => "emotion",
            Self::Family => "family",
            Self::Career => "career",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the author feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Stress,
    Lonely,
    Sad,
    Confused,
    Happy,
    #[serde(other)]
    Other,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Anxiety,
        Emotion::Stress,
        Emotion::Lonely,
        Emotion::Sad,
        Emotion::Confused,
        Emotion::Happy,
        Emotion::Other,
    ];

    /// Parse a form value. Unknown names fall back to `Other`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "anxiety" => Self::Anxiety,
            "stress" => Self::Stress,
            "lonely" => Self::Lonely,
            "sad" => Self::Sad,
            "confused" => Self::Confused,
            "happy" => Self::Happy,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::Stress => "stress",
            Self::Lonely => "lonely",
            Self::Sad => "sad",
            Self::Confused => "confused",
            Self::Happy => "happy",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
