// Thread plumbing shared by SenderWorker and ReceiverWorker

use crate::Core::error::WorkerError;
use crate::MPMC::Buffer::BoundedQueue;
use crate::MPMC::Structs::Buffer_Structs::CallerId;
use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// A background thread bound to a queue, identified on that queue by its
/// [`CallerId`]. The thread returns the callback context when it exits.
pub(crate) struct WorkerHandle<T, C> {
    pub(crate) caller: CallerId,
    pub(crate) queue: Arc<BoundedQueue<T>>,
    role: &'static str,
    terminated: Arc<CachePadded<AtomicBool>>,
    thread: Option<JoinHandle<C>>,
}

impl<T, C> WorkerHandle<T, C>
where
    T: Send + 'static,
    C: Send + 'static,
{
    /// Spawn `body` on a thread named `nmq-<role>-<caller>`.
    /// `body` must return once the flag it is given reads true.
    pub(crate) fn spawn<B>(
        role: &'static str,
        queue: Arc<BoundedQueue<T>>,
        body: B,
    ) -> Result<Self, WorkerError>
    where
        B: FnOnce(&BoundedQueue<T>, CallerId, &AtomicBool) -> C + Send + 'static,
    {
        let caller = CallerId::next();
        let terminated = Arc::new(CachePadded::new(AtomicBool::new(false)));

        let thread = thread::Builder::new()
            .name(format!("nmq-{role}-{caller}"))
            .spawn({
                let queue = Arc::clone(&queue);
                let terminated = Arc::clone(&terminated);
                move || {
                    let queue: &BoundedQueue<T> = &queue;
                    let terminated: &AtomicBool = &terminated;
                    debug!(%caller, role, "worker started");
                    let context = body(queue, caller, terminated);
                    debug!(%caller, role, "worker exiting");
                    context
                }
            })?;

        Ok(Self {
            caller,
            queue,
            role,
            terminated,
            thread: Some(thread),
        })
    }
}

impl<T, C> WorkerHandle<T, C> {
    pub(crate) fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Set the termination flag, abort our own blocking call and join.
    /// Returns None if the thread was already joined.
    fn shutdown(&mut self) -> Option<thread::Result<C>> {
        let thread = self.thread.take()?;

        self.terminated.store(true, Ordering::Release);
        self.queue.abort(self.caller);
        let joined = thread.join();

        // The thread may have seen the flag before the abort landed.
        self.queue.discard_abort(self.caller);
        debug!(caller = %self.caller, role = self.role, "worker joined");
        Some(joined)
    }

    pub(crate) fn stop(mut self) -> Result<C, WorkerError> {
        match self.shutdown() {
            Some(Ok(context)) => Ok(context),
            Some(Err(_)) => Err(WorkerError::Panicked),
            None => unreachable!("worker thread joined before stop"),
        }
    }
}

impl<T, C> Drop for WorkerHandle<T, C> {
    fn drop(&mut self) {
        if let Some(Err(_)) = self.shutdown() {
            warn!(caller = %self.caller, role = self.role, "worker thread panicked");
        }
    }
}
