use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Avatar palette shared by every anonymous author.
pub const AVATAR_COLORS: [&str; 5] = ["#4A90A4", "#E8A598", "#85C1E9", "#F4B084", "#D5DBDB"];

/// Level given to a fresh author.
pub const DEFAULT_LEVEL: &str = "新声";

/// Opaque author reference. Never carries identifying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0.simple())
    }
}

/// Author entity - the anonymous session user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub level: String,
    pub echo_value: u32,
    pub avatar_color: String,
    pub anonymous: bool,
}

impl Author {
    /// Create an anonymous author. `color_index` picks from [`AVATAR_COLORS`]
    /// and wraps around.
    pub fn anonymous(color_index: usize) -> Self {
        Self {
            id: AuthorId::generate(),
            level: DEFAULT_LEVEL.to_string(),
            echo_value: 0,
            avatar_color: AVATAR_COLORS[color_index % AVATAR_COLORS.len()].to_string(),
            anonymous: true,
        }
    }
}
