//! Error types for the server

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Invalid scene description: {0}")]
    Scene(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene lock poisoned")]
    Poisoned,

    #[error("Worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, ServerError>;
