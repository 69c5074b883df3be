//! Error types for zbx
//!
//! Two types live here:
//!
//! - **Error**: everything a zbx call can fail with, one variant per layer
//! - **RpcError**: the wire-format error object the remote API reports
//!
//! # Layers
//!
//! A failed call tells the caller which layer gave up:
//!
//! - `Transport`: the HTTP exchange itself failed (refused, timeout, TLS)
//! - `MalformedResponse`: bytes came back but are not a response envelope
//! - `Protocol`: a well-formed envelope carried an `error` object
//! - `UnexpectedResultShape`: the `result` had the wrong JSON type
//! - `VersionParse`: the API version string is not `major.minor.release`
//!
//! Transport failures are never folded into `RpcError`; the remote did not
//! get a chance to answer.
//!
//! # Examples
//!
//! ```rust
//! use zbx_core::{Error, RpcError};
//!
//! let remote = RpcError::new(-32602, "Invalid params.", "Not authorised.");
//! assert_eq!(remote.to_string(), "-32602 (Invalid params.): Not authorised.");
//!
//! let error: Error = remote.into();
//! assert_eq!(error.kind(), "protocol");
//! assert!(!error.retryable());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for zbx operations
pub type Result<T> = std::result::Result<T, Error>;

/// Application-level error type for zbx operations
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// HTTP or network failure before a response body was read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response bytes are not valid JSON or not a JSON-RPC envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The remote API reported a failure for an otherwise valid exchange
    #[error(transparent)]
    Protocol(#[from] RpcError),

    /// A result had a different JSON type than the flow expected
    ///
    /// Usually means the remote API changed or a method was called against
    /// the wrong server version.
    #[error("Unexpected result shape: expected {expected}, got {found}")]
    UnexpectedResultShape {
        /// What the caller asked for
        expected: String,
        /// What the result actually was
        found: String,
    },

    /// Version string did not split into three numeric components
    #[error("Version parse error: {0}")]
    VersionParse(String),

    /// Params or a request could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An array result did not contain exactly one element
    #[error("Expected exactly one result, got {0}.")]
    ExpectedOneResult(usize),

    /// An array result contained fewer elements than required
    #[error("Expected {expected}, got {got}.")]
    ExpectedMore {
        /// Minimum number of elements required
        expected: usize,
        /// Number of elements received
        got: usize,
    },

    /// The telemetry pipeline could not be started
    #[error("Observability error: {0}")]
    Observability(String),
}

impl Error {
    /// Short, stable label for the failing layer
    ///
    /// Used as a log field and as the `kind` attribute on error metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Transport(_) => "transport",
            Error::MalformedResponse(_) => "malformed_response",
            Error::Protocol(_) => "protocol",
            Error::UnexpectedResultShape { .. } => "unexpected_result_shape",
            Error::VersionParse(_) => "version_parse",
            Error::Serialization(_) => "serialization",
            Error::ExpectedOneResult(_) => "expected_one_result",
            Error::ExpectedMore { .. } => "expected_more",
            Error::Observability(_) => "observability",
        }
    }

    /// Whether repeating the same call could succeed
    ///
    /// Only transport failures qualify. zbx never retries on its own.
    pub fn retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The remote error object, if this is a protocol error
    pub fn as_protocol(&self) -> Option<&RpcError> {
        match self {
            Error::Protocol(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn unexpected_shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::UnexpectedResultShape {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Error object carried in the `error` field of a response envelope
///
/// The remote API always fills all three fields; `data` holds the detailed
/// reason (for example `"Session terminated, re-login, please."`). A missing
/// `data` key parses as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Numeric error code
    pub code: i32,
    /// Short description
    pub message: String,
    /// Detailed reason
    #[serde(default)]
    pub data: String,
}

impl RpcError {
    /// Create an error object
    pub fn new(code: i32, message: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: data.into(),
        }
    }
}

impl std::fmt::Display for RpcError {
    /// Formats as `"<code> (<message>): <data>"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.message, self.data)
    }
}

impl std::error::Error for RpcError {}
