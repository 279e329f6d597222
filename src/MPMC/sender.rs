// In src/MPMC/sender.rs
use super::worker::WorkerHandle;
use crate::Core::error::WorkerError;
use crate::MPMC::Buffer::BoundedQueue;
use crate::MPMC::Structs::Buffer_Structs::{CallerId, Message};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Verdict of a production callback.
pub enum Production<T> {
    /// Enqueue this message.
    Send(Message<T>),
    /// Nothing to send this round. Anything the callback produced stays with
    /// the callback; the worker loops and calls it again.
    NoData,
}

/// A background thread that pulls messages from a production callback and
/// pushes them into a shared queue.
///
/// The callback receives the worker's context on every call and owns its
/// own pacing: a callback with nothing to send should block or back off
/// before returning [`Production::NoData`].
pub struct SenderWorker<T, C> {
    handle: WorkerHandle<T, C>,
}

impl<T, C> SenderWorker<T, C>
where
    T: Send + 'static,
    C: Send + 'static,
{
    /// Start a sender thread feeding `queue` from `source`.
    pub fn spawn<F>(queue: Arc<BoundedQueue<T>>, source: F, context: C) -> Result<Self, WorkerError>
    where
        F: FnMut(&mut C) -> Production<T> + Send + 'static,
    {
        let handle = WorkerHandle::spawn("sender", queue, move |queue, caller, terminated| {
            run(queue, caller, terminated, source, context)
        })?;
        Ok(Self { handle })
    }
}

impl<T, C> SenderWorker<T, C> {
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

    /// Stop the thread, waking it if it is blocked in `send`, and hand back
    /// the callback context.
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
    mut source: F,
    mut context: C,
) -> C
where
    F: FnMut(&mut C) -> Production<T>,
{
    // A message whose send was aborted while we were not shutting down.
    let mut pending: Option<Message<T>> = None;

    while !terminated.load(Ordering::Acquire) {
        let message = match pending.take() {
            Some(message) => message,
            None => match source(&mut context) {
                Production::Send(message) => message,
                Production::NoData => continue,
            },
        };

        if let Err(err) = queue.send(message, caller) {
            pending = Some(err.into_message());
        }
    }

    if let Some(message) = pending {
        debug!(%caller, source = message.source, "dropping undelivered message");
    }
    context
}
