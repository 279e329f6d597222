pub mod error;
pub mod measure;

pub use error::{ErrorCode, QueueError, SendError, WorkerError};
