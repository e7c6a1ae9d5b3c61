//! Reply port - composes the supportive reply for a post.

use std::sync::Arc;

use crate::domain::Post;

/// Chooses an index below the given bound. Injected wherever the feed makes
/// a random choice so tests can pin the outcome.
pub type Picker = Arc<dyn Fn(usize) -> usize + Send + Sync>;

/// Picker that always returns `index`, clamped to the bound.
pub fn fixed_picker(index: usize) -> Picker {
    Arc::new(move |len: usize| if len == 0 { 0 } else { index.min(len - 1) })
}

/// Strategy producing the reply text for a post.
pub trait ReplyStrategy: Send + Sync {
    fn compose(&self, post: &Post) -> String;
}

impl<F> ReplyStrategy for F
where
    F: Fn(&Post) -> String + Send + Sync,
{
    fn compose(&self, post: &Post) -> String {
        self(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_picker_clamps() {
        let pick = fixed_picker(3);
        assert_eq!(pick(5), 3);
        assert_eq!(pick(2), 1);
        assert_eq!(pick(0), 0);
    }
}
