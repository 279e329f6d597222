// These are the structs that travel through the bounded queue

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Application-defined tag naming the origin of a message.
/// The queue never interprets it.
pub type Source = i32;

/// A single queue entry.
///
/// `data` is moved into the queue by [`send`](crate::MPMC::Buffer::BoundedQueue::send)
/// and moved out again by [`receive`](crate::MPMC::Buffer::BoundedQueue::receive);
/// the queue only stores and hands back the value. `size` is carried alongside
/// the payload untouched, so applications can use it as a byte length or as a
/// sequence tag.
pub struct Message<T> {
    pub source: Source,
    pub data: T,
    pub size: usize,
}

impl<T> Message<T> {
    pub fn new(source: Source, data: T, size: usize) -> Self {
        Self { source, data, size }
    }

    /// Split the message into its `(source, data, size)` parts.
    pub fn into_parts(self) -> (Source, T, usize) {
        (self.source, self.data, self.size)
    }
}

impl<T> fmt::Debug for Message<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_message(self, f)
    }
}

static NEXT_CALLER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a caller blocking on the queue.
///
/// Every blocking call names the caller it runs on behalf of, so that
/// [`abort`](crate::MPMC::Buffer::BoundedQueue::abort) can wake exactly that call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallerId(u64);

impl CallerId {
    /// Allocate a process-wide unique identity.
    pub fn next() -> Self {
        CallerId(NEXT_CALLER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
