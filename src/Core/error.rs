use crate::MPMC::Structs::Buffer_Structs::Message;
use std::fmt;
use std::io;
use thiserror::Error;

/// Errors returned by queue operations.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// The queue lock could not be created.
    #[error("mutex initialization failed")]
    LockInitFailed,
    /// A queue condition variable could not be created.
    #[error("condition variable initialization failed")]
    CondVarInitFailed,
    /// The slot band could not be allocated.
    #[error("out of memory")]
    OutOfMemory,
    /// The blocked call was aborted for its caller.
    #[error("aborted")]
    Abort,
    /// `try_send` found no free slot.
    #[error("queue is full")]
    Full,
    /// `try_receive` found no message.
    #[error("queue is empty")]
    Empty,
}

impl QueueError {
    /// The diagnostic code for this error, if it belongs to the closed code set.
    /// The non-blocking outcomes `Full` and `Empty` have no code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            QueueError::LockInitFailed => Some(ErrorCode::LockInitFailed),
            QueueError::CondVarInitFailed => Some(ErrorCode::CondVarInitFailed),
            QueueError::OutOfMemory => Some(ErrorCode::OutOfMemory),
            QueueError::Abort => Some(ErrorCode::Abort),
            QueueError::Full | QueueError::Empty => None,
        }
    }
}

/// Error for a send that did not enqueue its message.
///
/// The message is handed back so that ownership never gets lost.
#[derive(Error)]
#[error("failed to enqueue message from source {}: {cause}", .message.source)]
pub struct SendError<T> {
    /// The message that could not be sent
    pub message: Message<T>,
    /// The reason the message could not be sent
    #[source]
    pub cause: QueueError,
}

impl<T> SendError<T> {
    pub fn into_message(self) -> Message<T> {
        self.message
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendError")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

/// Errors returned by the worker wrappers.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The background thread could not be spawned.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
    /// The user callback panicked on the background thread.
    #[error("worker thread panicked")]
    Panicked,
}

/// Closed set of diagnostic codes.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError = 0,
    LockInitFailed = 1,
    CondVarInitFailed = 2,
    OutOfMemory = 3,
    Abort = 4,
}

impl ErrorCode {
    pub const MAX: i32 = ErrorCode::Abort as i32;

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::NoError),
            1 => Some(ErrorCode::LockInitFailed),
            2 => Some(ErrorCode::CondVarInitFailed),
            3 => Some(ErrorCode::OutOfMemory),
            4 => Some(ErrorCode::Abort),
            _ => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NoError => "No error",
            ErrorCode::LockInitFailed => "Mutex initialization failed",
            ErrorCode::CondVarInitFailed => "Condition variable initialization failed",
            ErrorCode::OutOfMemory => "Out of memory",
            ErrorCode::Abort => "Abort",
        }
    }

    /// Describe a raw code, including codes outside the known set.
    pub fn describe(code: i32) -> &'static str {
        Self::from_code(code).map_or("Unknown error", Self::as_str)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_raw_values() {
        for raw in 0..=ErrorCode::MAX {
            let code = ErrorCode::from_code(raw).unwrap();
            assert_eq!(code as i32, raw);
        }
        assert_eq!(ErrorCode::from_code(ErrorCode::MAX + 1), None);
        assert_eq!(ErrorCode::from_code(-1), None);
    }

    #[test]
    fn describe_unknown_code() {
        assert_eq!(ErrorCode::describe(3), "Out of memory");
        assert_eq!(ErrorCode::describe(42), "Unknown error");
    }

    #[test]
    fn queue_errors_map_to_codes() {
        assert_eq!(QueueError::Abort.code(), Some(ErrorCode::Abort));
        assert_eq!(QueueError::OutOfMemory.code(), Some(ErrorCode::OutOfMemory));
        assert_eq!(QueueError::Full.code(), None);
        assert_eq!(QueueError::Empty.code(), None);
    }

    #[test]
    fn send_error_keeps_message() {
        let err = SendError {
            message: Message::new(7, vec![1u8, 2, 3], 3),
            cause: QueueError::Abort,
        };
        assert_eq!(err.to_string(), "failed to enqueue message from source 7: aborted");
        let message = err.into_message();
        assert_eq!(message.data, vec![1, 2, 3]);
    }
}
