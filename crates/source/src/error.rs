//! Adapter Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, mirroring the boundary crate.
//!
//! Note what is *not* an error here: a structural query matching nothing
//! yields empty strings or collections, and a malformed chapter numeral
//! quietly becomes `0` — both are tolerated site conditions, not failures.

use derive_more::{Display, Error};
use tcb_net::error::{Error as NetError, ErrorKind as NetErrorKind};

/// An adapter error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Each category tells the caller what it can do about the failure, not
/// which internal step produced it.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The underlying fetch failed; the requesting operation was aborted.
    #[display("network failure: {_0}")]
    Network(NetErrorKind),
    /// Identifier exceeds the capacity reserved for site path fragments.
    #[display("identifier of {actual} bytes exceeds the {limit}-byte bound")]
    IdentifierTooLong { actual: usize, limit: usize },
    /// A field was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// Details about the parsing failure.
        value: String,
    },
}

impl ErrorKind {
    /// Convert a boundary error into an adapter error, preserving the
    /// boundary crate's `Exn` frame as a child in the error tree.
    #[track_caller]
    pub fn network(err: NetError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Network(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(inner) => inner.is_retryable(),
            Self::IdentifierTooLong { .. } | Self::ParseError { .. } => false,
        }
    }
}
