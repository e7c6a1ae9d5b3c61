//! Feed configuration.

use std::time::Duration;

use echo_core::domain::{MIN_COMMENT_CHARS, MIN_POST_CHARS};

/// In-memory feed configuration.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Minimum trimmed characters in a post.
    pub min_post_chars: usize,
    /// Minimum trimmed characters in a comment.
    pub min_comment_chars: usize,
    /// Delay before a scheduled AI reply is attached.
    pub reply_delay: Duration,
    /// Capacity of the broadcast channel used by async subscribers.
    pub broadcast_buffer: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            min_post_chars: MIN_POST_CHARS,
            min_comment_chars: MIN_COMMENT_CHARS,
            reply_delay: Duration::from_millis(2000),
            broadcast_buffer: 100,
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reply_delay: std::env::var("REPLY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.reply_delay),
            broadcast_buffer: std::env::var("FEED_BROADCAST_BUFFER")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.broadcast_buffer),
            ..defaults
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_feed_rules() {
        let config = FeedConfig::default();
        assert_eq!(config.min_post_chars, 10);
        assert_eq!(config.min_comment_chars, 5);
        assert_eq!(config.reply_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_with_reply_delay() {
        let config = FeedConfig::default().with_reply_delay(Duration::from_millis(10));
        assert_eq!(config.reply_delay.as_millis(), 10);
        assert_eq!(config.broadcast_buffer, 100);
    }
}
