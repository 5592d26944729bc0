//! Error types for the JSON codec

use thiserror::Error;

/// Domain reported by every encode and decode failure.
pub const ERROR_DOMAIN: &str = "com.pushkit.json.serialization";

/// Error codes reported for encode failures.
///
/// There is exactly one code: callers tell "failed" from "succeeded" and
/// read the variant only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum EncodeErrorCode {
    /// The value cannot be written as a JSON document.
    InvalidObject = 0,
}

/// Error codes reported for decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum DecodeErrorCode {
    /// The text is not a well-formed, collection-rooted JSON document.
    Malformed = 0,
}

/// Failure to encode a [`JsonValue`](crate::JsonValue) as JSON text.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Root is a scalar and fragments were not accepted.
    #[error("top-level {kind} is not a JSON object or array")]
    FragmentNotAllowed {
        /// Kind of the offending root value.
        kind: &'static str,
    },
    /// NaN or an infinity somewhere in the tree.
    #[error("non-finite number {value} at {path}")]
    NonFiniteNumber {
        /// JSON Pointer to the offending number.
        path: String,
        /// The number itself.
        value: f64,
    },
    /// Arrays and objects nested deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting deeper than {limit} levels at {path}")]
    DepthLimitExceeded {
        /// JSON Pointer to the first container past the limit.
        path: String,
        /// The nesting limit.
        limit: usize,
    },
    /// The serializer rejected the converted tree.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EncodeError {
    /// Error domain, shared with [`DecodeError::domain`].
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// Error code; always [`EncodeErrorCode::InvalidObject`].
    pub fn code(&self) -> EncodeErrorCode {
        EncodeErrorCode::InvalidObject
    }
}

/// Failure to decode JSON text into a [`JsonValue`](crate::JsonValue).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Grammar violation: unterminated string, bad escape, trailing data...
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// Well-formed document whose root is a scalar.
    #[error("top-level {kind} is not a JSON object or array")]
    NotACollection {
        /// Kind of the decoded root value.
        kind: &'static str,
    },
    /// Arrays and objects nested deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded {
        /// The nesting limit.
        limit: usize,
    },
    /// Input bytes are not UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl DecodeError {
    /// Error domain, shared with [`EncodeError::domain`].
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// Error code; always [`DecodeErrorCode::Malformed`].
    pub fn code(&self) -> DecodeErrorCode {
        DecodeErrorCode::Malformed
    }
}
