//! # Echo Shared
//!
//! Presentation-facing types: view models, labels and notices the view
//! layer renders. Nothing here mutates the feed.

pub mod dto;
pub mod labels;
pub mod response;
pub mod time;

pub use dto::{PostView, StatsView};
pub use response::{ApiResponse, Notice, NoticeLevel};
pub use time::time_ago;
