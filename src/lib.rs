// Module naming follows project convention (MPMC = Multi-Producer Multi-Consumer)
#[allow(non_snake_case)]
pub mod MPMC;

#[allow(non_snake_case)]
pub mod Core;

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub mod trace;

pub use Core::{ErrorCode, QueueError, SendError, WorkerError};
pub use MPMC::{
    BoundedQueue, CallerId, Message, Production, QueueBuilder, ReceiverWorker, SenderWorker,
    Source,
};
