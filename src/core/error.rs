use thiserror::Error;

/// The error type returned by fallible deque operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// The requested value is not present in the deque.
    #[error("value not found in deque")]
    NotFound,
    /// An insertion would grow a bounded deque past its maximum length.
    #[error("deque already at its maximum size ({maxlen})")]
    Full {
        /// The maximum length of the deque.
        maxlen: usize,
    },
    /// A positional access was outside of `0..len`.
    #[error("deque index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the deque at the time of the access.
        len: usize,
    },
    /// The deque was modified while it was being iterated or searched.
    #[error("deque mutated during iteration")]
    MutatedDuringIteration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DequeError::NotFound.to_string(), "value not found in deque");
        assert_eq!(
            DequeError::Full { maxlen: 3 }.to_string(),
            "deque already at its maximum size (3)"
        );
        assert_eq!(
            DequeError::IndexOutOfRange { index: 5, len: 2 }.to_string(),
            "deque index 5 out of range for length 2"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DequeError::MutatedDuringIteration);
        assert_eq!(err.to_string(), "deque mutated during iteration");
    }
}
