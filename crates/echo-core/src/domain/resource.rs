use serde::{Deserialize, Serialize};

/// Kind of support resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Hotline,
    Counseling,
    Exercise,
    Music,
}

/// Either a way to reach someone or something to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceDetail {
    Contact(String),
    Content(String),
}

/// Support resource listed in the help station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub description: String,
    pub detail: ResourceDetail,
}

/// Kind of mystery box item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxItemKind {
    Breathing,
    Music,
    Quote,
    Exercise,
}

/// Item drawn from the mystery box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxItem {
    pub kind: BoxItemKind,
    pub title: String,
    pub content: String,
}
