use serde::{Deserialize, Serialize};

const DEFAULT_CAPACITY: usize = 0;

/// The configuration struct used to construct a [`BoundedDeque`](crate::core::BoundedDeque) or
/// [`SharedDeque`](crate::core::SharedDeque). This holds the maximum length of the deque and the
/// number of slots to allocate up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DequeConfig {
    /// The maximum length of the deque, or [`None`] for an unbounded deque.
    pub maxlen: Option<usize>,
    /// The number of elements to preallocate storage for.
    pub capacity: usize,
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self {
            maxlen: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DequeConfig {
    /// Sets the maximum length of the deque. Once the deque holds `maxlen` elements, every
    /// insertion evicts one element from the opposite end.
    pub fn with_maxlen(&mut self, maxlen: usize) -> &mut Self {
        self.maxlen = Some(maxlen);
        self
    }

    /// Removes the maximum length, making the deque unbounded (default).
    pub fn unbounded(&mut self) -> &mut Self {
        self.maxlen = None;
        self
    }

    /// Sets the number of elements to preallocate storage for (default: 0).
    ///
    /// The preallocation never exceeds the maximum length of a bounded deque.
    pub fn with_capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// The number of slots which will actually be preallocated.
    pub fn initial_capacity(&self) -> usize {
        self.maxlen
            .map_or(self.capacity, |maxlen| self.capacity.min(maxlen))
    }
}
