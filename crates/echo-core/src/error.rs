//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Input rejected before it reaches the feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Post content must be at least {min} characters (got {actual})")]
    ContentTooShort { min: usize, actual: usize },

    #[error("Comment must be at least {min} characters (got {actual})")]
    CommentTooShort { min: usize, actual: usize },
}

/// Feed errors - reported synchronously so the view can show inline feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Post not found: {id}")]
    NotFound { id: PostId },
}

impl FeedError {
    pub fn not_found(id: PostId) -> Self {
        Self::NotFound { id }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_lengths() {
        let err = FeedError::from(ValidationError::ContentTooShort { min: 10, actual: 1 });
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation failed: Post content must be at least 10 characters (got 1)"
        );
    }

    #[test]
    fn test_not_found_names_post() {
        let err = FeedError::not_found(PostId::new(42));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Post not found: post_42");
    }
}
