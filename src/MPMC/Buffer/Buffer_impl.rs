use std::collections::HashSet;

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use super::layout::RingState;
use super::Buffer::BoundedQueue;
use crate::Core::error::{QueueError, SendError};
use crate::MPMC::Structs::Buffer_Structs::{CallerId, Message};

impl<T> BoundedQueue<T> {
    /// Create a queue with `capacity` message slots.
    ///
    /// # Errors
    /// `OutOfMemory` if the slot band cannot be reserved.
    ///
    /// # Panics
    /// If `capacity` is zero. Callers validate the capacity before construction.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        assert!(capacity > 0, "BoundedQueue capacity must be greater than zero");

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| QueueError::OutOfMemory)?;
        slots.resize_with(capacity, || None);

        trace!(capacity, "bounded queue created");

        Ok(Self {
            state: Mutex::new(RingState {
                slots,
                read_position: 0,
                write_position: 0,
                occupied: 0,
                pending_aborts: HashSet::new(),
            }),
            space_available: Condvar::new(),
            data_available: Condvar::new(),
            capacity,
        })
    }

    /// Number of message slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of messages currently enqueued.
    pub fn len(&self) -> usize {
        self.state.lock().occupied
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.state.lock().is_full()
    }

    /// Enqueue a message, blocking while the queue is full.
    ///
    /// Returns `Abort` (with the message handed back) if an abort for `caller`
    /// is pending on entry or arrives while blocked. An abort always wins over
    /// a slot that was freed at the same time.
    pub fn send(&self, message: Message<T>, caller: CallerId) -> Result<(), SendError<T>> {
        let mut state = self.state.lock();
        loop {
            if state.take_abort(caller) {
                trace!(%caller, "send aborted");
                return Err(SendError {
                    message,
                    cause: QueueError::Abort,
                });
            }
            if !state.is_full() {
                state.push(message);
                drop(state);
                self.data_available.notify_one();
                return Ok(());
            }
            self.space_available.wait(&mut state);
        }
    }

    /// Dequeue the oldest message, blocking while the queue is empty.
    ///
    /// Returns `Abort` if an abort for `caller` is pending on entry or arrives
    /// while blocked; the ring is left untouched in that case.
    pub fn receive(&self, caller: CallerId) -> Result<Message<T>, QueueError> {
        let mut state = self.state.lock();
        loop {
            if state.take_abort(caller) {
                trace!(%caller, "receive aborted");
                return Err(QueueError::Abort);
            }
            if let Some(message) = state.pop() {
                drop(state);
                self.space_available.notify_one();
                return Ok(message);
            }
            self.data_available.wait(&mut state);
        }
    }

    /// Enqueue without blocking.
    /// Returns `Full` with the message handed back if no slot is free.
    pub fn try_send(&self, message: Message<T>) -> Result<(), SendError<T>> {
        let mut state = self.state.lock();
        if state.is_full() {
            return Err(SendError {
                message,
                cause: QueueError::Full,
            });
        }
        state.push(message);
        drop(state);
        self.data_available.notify_one();
        Ok(())
    }

    /// Dequeue without blocking.
    /// Returns `Empty` if no message is enqueued.
    pub fn try_receive(&self) -> Result<Message<T>, QueueError> {
        let mut state = self.state.lock();
        let message = state.pop().ok_or(QueueError::Empty)?;
        drop(state);
        self.space_available.notify_one();
        Ok(message)
    }

    /// Deliver a one-shot abort to `target`.
    ///
    /// The next (or current) blocking `send`/`receive` made for `target` returns
    /// `Abort`. Every waiter is woken so the target can observe the abort; the
    /// others re-check their predicate and go back to sleep. Does not wait for
    /// the target to wake up.
    pub fn abort(&self, target: CallerId) {
        let mut state = self.state.lock();
        state.pending_aborts.insert(target);
        trace!(%target, pending = state.pending_aborts.len(), "abort issued");
        drop(state);
        self.space_available.notify_all();
        self.data_available.notify_all();
    }

    /// Whether an abort for `caller` has been issued but not yet consumed.
    pub fn is_abort_pending(&self, caller: CallerId) -> bool {
        self.state.lock().pending_aborts.contains(&caller)
    }

    /// Drop an unconsumed abort for `caller`.
    /// Returns true if one was pending.
    pub fn discard_abort(&self, caller: CallerId) -> bool {
        self.state.lock().pending_aborts.remove(&caller)
    }
}
