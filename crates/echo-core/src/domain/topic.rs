use serde::{Deserialize, Serialize};

use super::taxonomy::Category;

/// Discussion topic shown beside the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub participants: u32,
    /// Share of readers who report the same confusion, in percent.
    pub same_confusion_pct: u8,
    pub hot: bool,
    pub category: Category,
}
