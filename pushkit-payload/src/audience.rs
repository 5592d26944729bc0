//! Audience selectors and alert payload assembly

use pushkit_json::{JsonMap, JsonValue};

use crate::keys::{
    ALERT_KEY, ALIAS_KEY, AUDIENCE_KEY, BROADCAST_AUDIENCE, CHANNEL_KEY, DEVICE_TOKEN_KEY,
    NAMED_USER_KEY, SINGLE_TAG_KEY,
};

/// Who a push is addressed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// One device, by push token
    DeviceToken(String),
    /// Every device carrying the tag
    Tag(String),
    /// Every device registered under the alias
    Alias(String),
    /// A named user's devices
    NamedUser(String),
    /// One channel
    Channel(String),
    /// Every device
    Broadcast,
}

impl Audience {
    /// Selector mapping, e.g. `{"tag": "vip"}` or `{"audience": "all"}`.
    pub fn to_map(&self) -> JsonMap {
        let (key, value) = match self {
            Audience::DeviceToken(token) => (DEVICE_TOKEN_KEY, token.as_str()),
            Audience::Tag(tag) => (SINGLE_TAG_KEY, tag.as_str()),
            Audience::Alias(alias) => (ALIAS_KEY, alias.as_str()),
            Audience::NamedUser(user) => (NAMED_USER_KEY, user.as_str()),
            Audience::Channel(channel) => (CHANNEL_KEY, channel.as_str()),
            Audience::Broadcast => (AUDIENCE_KEY, BROADCAST_AUDIENCE),
        };
        let mut map = JsonMap::with_capacity(1);
        map.insert(key.to_string(), JsonValue::from(value));
        map
    }
}

/// Merge the audience selector with `{"alert": alert}`.
pub fn push_payload(audience: &Audience, alert: &str) -> JsonMap {
    let mut payload = audience.to_map();
    payload.insert(ALERT_KEY.to_string(), JsonValue::from(alert));
    payload
}
