mod builder;
mod debug;
mod receiver;
mod sender;
mod worker;

pub use builder::QueueBuilder;
pub use receiver::ReceiverWorker;
pub use sender::{Production, SenderWorker};
pub use Buffer::BoundedQueue;
pub use Structs::{CallerId, Message, Source};

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub mod layout;
    pub use Buffer::{BoundedQueue, DEFAULT_CAPACITY}; // re-export for stable path
}

pub mod Structs {
    pub mod Buffer_Structs;
    pub use Buffer_Structs::{CallerId, Message, Source}; // re-export for stable path
}
