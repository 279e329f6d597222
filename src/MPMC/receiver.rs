// src/MPMC/receiver.rs

use super::worker::WorkerHandle;
use crate::Core::error::WorkerError;
use crate::MPMC::Buffer::BoundedQueue;
use crate::MPMC::Structs::Buffer_Structs::{CallerId, Message};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A background thread that pulls messages from a shared queue and hands
/// each one, by value, to a consumption callback.
pub struct ReceiverWorker<T, C> {
    handle: WorkerHandle<T, C>,
}

impl<T, C> ReceiverWorker<T, C>
where
    T: Send + 'static,
    C: Send + 'static,
{
    /// Start a receiver thread draining `queue` into `sink`.
    pub fn spawn<F>(queue: Arc<BoundedQueue<T>>, sink: F, context: C) -> Result<Self, WorkerError>
    where
        F: FnMut(Message<T>, &mut C) + Send + 'static,
    {
        let handle = WorkerHandle::spawn("receiver", queue, move |queue, caller, terminated| {
            run(queue, caller, terminated, sink, context)
        })?;
        Ok(Self { handle })
    }
}

impl<T, C> ReceiverWorker<T, C> {
    /// Identity this worker blocks under.
    pub fn caller_id(&self) -> CallerId {
        self.handle.caller
    }

    pub fn queue(&self) -> &Arc<BoundedQueue<T>> {
        &self.handle.queue
    }

    /// Whether the background thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the thread, waking it if it is blocked in `receive`, and hand
    /// back the callback context.
    ///
    /// # Errors
    /// `Panicked` if the callback panicked.
    pub fn stop(self) -> Result<C, WorkerError> {
        self.handle.stop()
    }
}

fn run<T, C, F>(
    queue: &BoundedQueue<T>,
    caller: CallerId,
    terminated: &AtomicBool,
    mut sink: F,
    mut context: C,
) -> C
where
    F: FnMut(Message<T>, &mut C),
{
    while !terminated.load(Ordering::Acquire) {
        // Err is an abort; loop back to the flag.
        if let Ok(message) = queue.receive(caller) {
            sink(message, &mut context);
        }
    }
    context
}
