//! Network Boundary Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A network error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Each category tells the caller what it can do about the failure, not
/// which internal step produced it.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure (DNS, TLS, socket, malformed URL).
    #[display("transport error: {_0}")]
    Transport(#[error(not(source))] String),
    /// The server answered with a non-success status.
    #[display("HTTP {code} from {url}")]
    Status { code: u16, url: String },
    /// No response is configured for the URL (mock client).
    #[display("no response for {_0}")]
    NotFound(#[error(not(source))] String),
    /// The request URL could not be parsed; nothing was sent.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            // Rate limiting and server-side failures are transient;
            // everything else is the caller's request being wrong.
            Self::Status { code, .. } => *code == 429 || *code >= 500,
            Self::NotFound(_) | Self::InvalidUrl(_) => false,
        }
    }
}
