//! Reply strategies.

mod canned;

pub use canned::{CannedReplies, FixedReply};
