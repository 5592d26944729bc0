//! Hand-off to the push transport
//!
//! Payloads leave this crate as a [`PushRequest`]: a target URL and a JSON
//! body. How the request travels is up to the [`Transport`] implementation;
//! nothing here retries or authenticates.

use bytes::Bytes;
use pushkit_json::{encode_to_vec, EncodeError, EncodeOptions, JsonMap, JsonValue};
use thiserror::Error;
use tracing::{debug, warn};

use crate::audience::{push_payload, Audience};

/// Content type of every request body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON document addressed to a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    /// Target URL
    pub url: String,
    /// Body media type
    pub content_type: &'static str,
    /// Encoded body
    pub body: Bytes,
}

impl PushRequest {
    /// Encode `payload` compactly into a request for `url`.
    pub fn json(url: impl Into<String>, payload: &JsonMap) -> Result<Self, EncodeError> {
        let body = encode_to_vec(&JsonValue::Object(payload.clone()), EncodeOptions::default())?;
        Ok(Self {
            url: url.into(),
            content_type: JSON_CONTENT_TYPE,
            body: Bytes::from(body),
        })
    }
}

/// Delivers requests
pub trait Transport {
    /// Transport-specific failure
    type Error: std::error::Error + 'static;

    /// Deliver one request. Called once per send; never retried here.
    fn send(&self, request: PushRequest) -> Result<(), Self::Error>;
}

/// Failure to send a push
#[derive(Debug, Error)]
pub enum PushError<E: std::error::Error + 'static> {
    /// The payload did not encode
    #[error("payload encoding failed: {0}")]
    Encode(#[from] EncodeError),
    /// The transport rejected the request
    #[error("transport failed: {0}")]
    Transport(#[source] E),
}

/// Sends alerts to a fixed push endpoint
#[derive(Debug, Clone)]
pub struct PushClient<T> {
    url: String,
    transport: T,
}

impl<T: Transport> PushClient<T> {
    /// Client posting to `url` through `transport`
    pub fn new(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode and send an already assembled payload.
    pub fn send_payload(&self, payload: &JsonMap) -> Result<(), PushError<T::Error>> {
        let request = PushRequest::json(self.url.as_str(), payload)?;
        debug!(url = %request.url, bytes = request.body.len(), "sending push request");
        self.transport.send(request).map_err(|err| {
            warn!(url = %self.url, error = %err, "push transport failed");
            PushError::Transport(err)
        })
    }

    /// Send `alert` to `audience`.
    pub fn send_alert(&self, audience: &Audience, alert: &str) -> Result<(), PushError<T::Error>> {
        self.send_payload(&push_payload(audience, alert))
    }

    /// Send `alert` to one device token.
    pub fn send_alert_to_device_token(
        &self,
        alert: &str,
        device_token: &str,
    ) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::DeviceToken(device_token.to_string()), alert)
    }

    /// Send `alert` to every device with `tag`.
    pub fn send_alert_to_tag(&self, alert: &str, tag: &str) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::Tag(tag.to_string()), alert)
    }

    /// Send `alert` to every device under `alias`.
    pub fn send_alert_to_alias(&self, alert: &str, alias: &str) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::Alias(alias.to_string()), alert)
    }

    /// Send `alert` to a named user.
    pub fn send_alert_to_named_user(
        &self,
        alert: &str,
        named_user: &str,
    ) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::NamedUser(named_user.to_string()), alert)
    }

    /// Send `alert` to a channel.
    pub fn send_alert_to_channel(
        &self,
        alert: &str,
        channel: &str,
    ) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::Channel(channel.to_string()), alert)
    }

    /// Send `alert` to every device.
    pub fn send_broadcast_alert(&self, alert: &str) -> Result<(), PushError<T::Error>> {
        self.send_alert(&Audience::Broadcast, alert)
    }
}
