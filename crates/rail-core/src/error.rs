//! Error Types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Chat client error types
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request never produced a response (DNS, refused, CORS, aborted)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Session store unavailable or rejected the write
    #[error("Storage error: {0}")]
    Storage(String),
}
