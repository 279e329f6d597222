use super::Buffer::{BoundedQueue, DEFAULT_CAPACITY};
use crate::Core::error::QueueError;
use std::sync::Arc;

pub struct QueueBuilder {
    capacity: usize,
}

impl Default for QueueBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY, // 1024 slots
        }
    }
}

impl QueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of message slots. Must be greater than zero.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Build a queue ready to be shared between workers.
    ///
    /// # Panics
    /// If the configured capacity is zero.
    pub fn build<T>(self) -> Result<Arc<BoundedQueue<T>>, QueueError> {
        BoundedQueue::new(self.capacity).map(Arc::new)
    }
}
