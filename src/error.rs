// Error types for the tuido application.
// Covers API transport failures, non-success HTTP statuses, and terminal IO.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuidoError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected the request (400) with a `detail` message.
    #[error("{0}")]
    Rejected(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TuidoError>;
