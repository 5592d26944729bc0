//! Pushkit Payload - Registration and push payload assembly
//!
//! This crate turns device and audience state into JSON mappings ready for
//! the push service:
//!
//! - Registration payloads that omit every unset field
//! - Audience selectors merged with alert text
//! - The request/transport boundary used to hand payloads off
//!
//! Serialization is delegated to `pushkit-json`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod audience;
pub mod client;
pub mod keys;
pub mod registration;

// Re-export commonly used types
pub use pushkit_json::{EncodeError, JsonMap, JsonValue};

// Re-export our own types
pub use audience::{push_payload, Audience};
pub use client::{PushClient, PushError, PushRequest, Transport, JSON_CONTENT_TYPE};
pub use registration::{build_registration, QuietTime, RegistrationPayload};
