use std::fmt;
use crate::MPMC::Buffer::BoundedQueue;
use crate::MPMC::Structs::Buffer_Structs::{CallerId, Message};

/// Debug function for BoundedQueue
///
/// Shows:
/// - Capacity
/// - Occupancy and ring cursors, if the lock is free
/// - Number of undelivered aborts
///
/// Never blocks: a held lock is reported as `<locked>`.
pub fn debug_bounded_queue<T>(queue: &BoundedQueue<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("BoundedQueue");
    s.field("capacity", &queue.capacity);
    match queue.state.try_lock() {
        Some(state) => s
            .field("occupied", &state.occupied)
            .field("read_position", &state.read_position)
            .field("write_position", &state.write_position)
            .field("pending_aborts", &state.pending_aborts.len()),
        None => s.field("state", &format_args!("<locked>")),
    };
    s.finish()
}

/// Debug function for Message
///
/// Payloads are opaque to the queue, so only the metadata is shown.
pub fn debug_message<T>(message: &Message<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Message")
        .field("source", &message.source)
        .field("size", &message.size)
        .field("data", &format_args!("<{}>", std::any::type_name::<T>()))
        .finish()
}

/// Debug function for SenderWorker and ReceiverWorker
pub fn debug_worker(
    name: &str,
    caller: CallerId,
    finished: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct(name)
        .field("caller", &caller)
        .field("finished", &finished)
        .finish_non_exhaustive()
}
