use super::{BoundedQueue, ReceiverWorker, SenderWorker};
use crate::Debug::StructDebug;
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_bounded_queue(self, f)
    }
}

impl<T, C> fmt::Debug for SenderWorker<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_worker("SenderWorker", self.caller_id(), self.is_finished(), f)
    }
}

impl<T, C> fmt::Debug for ReceiverWorker<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StructDebug::debug_worker("ReceiverWorker", self.caller_id(), self.is_finished(), f)
    }
}
