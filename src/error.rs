//! Error conditions raised by [`HybridDeque`](crate::HybridDeque) and its iterators.

use thiserror::Error;

/// Misuse of a deque or one of its removal-capable iterators.
///
/// Every variant is raised synchronously at the point of misuse and is never retried
/// or suppressed internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// An absent value was offered for insertion.
    #[error("cannot insert an absent value")]
    InvalidArgument,
    /// An element was required but the deque is empty.
    #[error("the deque is empty")]
    EmptyCollection,
    /// The iterator has no remaining element in its traversal direction.
    #[error("the iterator has no remaining elements")]
    Exhausted,
    /// `remove` was called without a preceding, not yet consumed call to `next`.
    #[error("`remove` requires a preceding call to `next`")]
    IllegalState,
    /// The requested block capacity cannot hold the canonical empty state.
    #[error("block size must be at least {min}, got {got}")]
    InvalidBlockSize {
        /// Requested capacity.
        got: usize,
        /// Smallest accepted capacity.
        min: usize,
    },
}

/// Shorthand for results whose error is [`DequeError`].
pub type Result<T, E = DequeError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DequeError::EmptyCollection.to_string(), "the deque is empty");
        assert_eq!(
            DequeError::InvalidBlockSize { got: 1, min: 2 }.to_string(),
            "block size must be at least 2, got 1"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(DequeError::IllegalState);
    }
}
