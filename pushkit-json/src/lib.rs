//! Pushkit JSON - Strict JSON codec for push payloads
//!
//! This crate converts between JSON text and a typed value tree with no I/O
//! dependencies. It includes:
//!
//! - The `JsonValue` tree (null, boolean, number, string, array, object)
//! - `encode` / `encode_to_vec` with fragment control and formatting flags
//! - `decode` / `decode_slice` requiring an object or array root
//! - A shared nesting limit, `MAX_DEPTH`, so whatever encodes also decodes
//! - Error types carrying a fixed domain and code
//!
//! Every call is a pure function of its arguments and is safe to run
//! concurrently from any number of threads.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

// Re-export commonly used types
pub use decode::{decode, decode_slice};
pub use encode::{encode, encode_to_vec};
pub use error::{DecodeError, DecodeErrorCode, EncodeError, EncodeErrorCode, ERROR_DOMAIN};
pub use options::{EncodeOptions, ReadingOptions, WritingOptions, MAX_DEPTH};
pub use value::{JsonMap, JsonNumber, JsonValue};
