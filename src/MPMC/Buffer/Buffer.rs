// This is the bounded round buffer shared by all senders and receivers

use super::layout::RingState;

use parking_lot::{Condvar, Mutex};

/// The default number of message slots.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A bounded, blocking, multi-producer, multi-consumer (MPMC) message queue.
///
/// ### Concurrency Design:
/// - **One lock**: every field of the ring lives in [`RingState`] behind a single
///   mutex. It is held only for O(1) bookkeeping, never across user code.
/// - **Two condition variables**: producers wait on `space_available`, consumers
///   wait on `data_available`. A write wakes one consumer, a read wakes one
///   producer, so neither role wakes the other needlessly.
/// - **Targeted abort**: [`abort`](BoundedQueue::abort) records the target
///   caller and wakes every waiter. Each waiter checks for its own abort before
///   re-checking the ring, so only the named caller returns early and it does so
///   without touching the ring.
pub struct BoundedQueue<T> {
    /// Ring cursors, slots and pending aborts.
    pub(crate) state: Mutex<RingState<T>>,

    /// Signalled whenever a slot is freed.
    pub(crate) space_available: Condvar,

    /// Signalled whenever a slot is filled.
    pub(crate) data_available: Condvar,

    /// The capacity of the buffer (number of slots).
    pub(crate) capacity: usize,
}
