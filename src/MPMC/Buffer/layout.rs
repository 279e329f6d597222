use crate::MPMC::Structs::Buffer_Structs::{CallerId, Message};
use std::collections::HashSet;

/// The state guarded by the queue lock.
///
/// This struct keeps the ring cursors, the slot band and the pending aborts
/// together so that one lock acquisition covers every field a blocking call
/// has to inspect.
pub struct RingState<T> {
    /// Slot band. `None` marks a free slot.
    /// Its length is the capacity and never changes after construction.
    pub slots: Vec<Option<Message<T>>>,

    /// Next slot a consumer reads, always in `0..capacity`.
    pub read_position: usize,

    /// Next slot a producer writes, always in `0..capacity`.
    pub write_position: usize,

    /// Number of filled slots, always in `0..=capacity`.
    pub occupied: usize,

    /// Callers with an undelivered abort.
    /// Each caller has its own entry, so two aborts issued back to back for
    /// different callers are both delivered.
    pub pending_aborts: HashSet<CallerId>,
}

impl<T> RingState<T> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Consume the abort addressed to `caller`, if there is one.
    #[inline]
    pub fn take_abort(&mut self, caller: CallerId) -> bool {
        !self.pending_aborts.is_empty() && self.pending_aborts.remove(&caller)
    }

    /// Write into the slot at `write_position`.
    /// The caller must have checked that the ring is not full.
    pub fn push(&mut self, message: Message<T>) {
        debug_assert!(self.occupied < self.capacity());
        let idx = self.write_position;
        debug_assert!(self.slots[idx].is_none());
        self.slots[idx] = Some(message);
        self.write_position = (idx + 1) % self.capacity();
        self.occupied += 1;
    }

    /// Take the slot at `read_position`.
    /// Returns None if the ring is empty.
    pub fn pop(&mut self) -> Option<Message<T>> {
        if self.occupied == 0 {
            return None;
        }
        let idx = self.read_position;
        let message = self.slots[idx].take();
        debug_assert!(message.is_some());
        self.read_position = (idx + 1) % self.capacity();
        self.occupied -= 1;
        message
    }
}
