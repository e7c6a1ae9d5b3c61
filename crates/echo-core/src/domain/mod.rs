//! Domain entities - the core business objects.

mod author;
mod post;
mod resource;
mod taxonomy;
mod topic;

pub use author::{AVATAR_COLORS, Author, AuthorId, DEFAULT_LEVEL};
pub use post::{
    AiReply, MIN_COMMENT_CHARS, MIN_POST_CHARS, Post, PostDraft, PostId, ReplyStatus,
    validate_comment, validate_content, visible_len,
};
pub use resource::{BoxItem, BoxItemKind, Resource, ResourceDetail, ResourceKind};
pub use taxonomy::{Category, Emotion};
pub use topic::Topic;
