//! Device registration payloads
//!
//! A [`RegistrationPayload`] holds the sparse set of device attributes sent
//! when registering for push. Unset fields are left out of the mapping
//! entirely; they are never written as `null`.

use bytes::Bytes;
use pushkit_json::{encode, encode_to_vec, EncodeOptions, JsonMap, JsonValue};
use tracing::warn;

use crate::keys::{
    ALIAS_KEY, BADGE_KEY, MULTIPLE_TAGS_KEY, QUIET_TIME_END_KEY, QUIET_TIME_KEY,
    QUIET_TIME_START_KEY, SINGLE_TAG_KEY, TIME_ZONE_KEY,
};

/// Daily do-not-disturb window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuietTime {
    /// Start time of day, e.g. `"22:00"`
    pub start: String,
    /// End time of day, e.g. `"08:00"`
    pub end: String,
}

impl QuietTime {
    /// Window from `start` to `end`
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl From<QuietTime> for JsonMap {
    fn from(quiet_time: QuietTime) -> Self {
        let mut map = JsonMap::with_capacity(2);
        map.insert(QUIET_TIME_START_KEY.to_string(), quiet_time.start.into());
        map.insert(QUIET_TIME_END_KEY.to_string(), quiet_time.end.into());
        map
    }
}

/// Registration attributes for one device
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationPayload {
    alias: Option<String>,
    tags: Option<Vec<String>>,
    time_zone: Option<String>,
    quiet_time: Option<JsonMap>,
    badge: Option<i64>,
}

impl RegistrationPayload {
    /// Payload from the full set of optional fields.
    ///
    /// `quiet_time` is passed through as given; its shape is not checked.
    pub fn new(
        alias: Option<String>,
        tags: Option<Vec<String>>,
        time_zone: Option<String>,
        quiet_time: Option<JsonMap>,
        badge: Option<i64>,
    ) -> Self {
        Self {
            alias,
            tags,
            time_zone,
            quiet_time,
            badge,
        }
    }

    /// Set the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the time zone name
    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Set the quiet-time window
    pub fn with_quiet_time(mut self, quiet_time: impl Into<JsonMap>) -> Self {
        self.quiet_time = Some(quiet_time.into());
        self
    }

    /// Set the badge count
    pub fn with_badge(mut self, badge: i64) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Alias, if set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Tags, if set
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Time zone, if set
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    /// Quiet-time mapping, if set
    pub fn quiet_time(&self) -> Option<&JsonMap> {
        self.quiet_time.as_ref()
    }

    /// Badge count, if set
    pub fn badge(&self) -> Option<i64> {
        self.badge
    }

    /// Mapping holding exactly the fields that are set.
    ///
    /// A single tag is written under `"tag"`; any other count, zero
    /// included, is written as a list under `"tags"`.
    pub fn to_map(&self) -> JsonMap {
        let mut map = JsonMap::new();

        if let Some(alias) = &self.alias {
            map.insert(ALIAS_KEY.to_string(), JsonValue::from(alias.as_str()));
        }

        if let Some(tags) = &self.tags {
            match tags.as_slice() {
                [tag] => {
                    map.insert(SINGLE_TAG_KEY.to_string(), JsonValue::from(tag.as_str()));
                }
                _ => {
                    map.insert(
                        MULTIPLE_TAGS_KEY.to_string(),
                        tags.iter().map(String::as_str).collect(),
                    );
                }
            }
        }

        if let Some(time_zone) = &self.time_zone {
            map.insert(TIME_ZONE_KEY.to_string(), JsonValue::from(time_zone.as_str()));
        }

        if let Some(quiet_time) = &self.quiet_time {
            map.insert(
                QUIET_TIME_KEY.to_string(),
                JsonValue::Object(quiet_time.clone()),
            );
        }

        if let Some(badge) = self.badge {
            map.insert(BADGE_KEY.to_string(), JsonValue::from(badge));
        }

        map
    }

    /// The mapping wrapped as an object value
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.to_map())
    }

    /// Compact JSON text, or `None` if encoding fails.
    ///
    /// Use [`pushkit_json::encode`] on [`to_value`](Self::to_value) to see
    /// the failure reason.
    pub fn to_json_string(&self) -> Option<String> {
        match encode(&self.to_value(), EncodeOptions::default()) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(error = %err, "registration payload could not be encoded");
                None
            }
        }
    }

    /// UTF-8 bytes of [`to_json_string`](Self::to_json_string).
    pub fn to_json_bytes(&self) -> Option<Bytes> {
        match encode_to_vec(&self.to_value(), EncodeOptions::default()) {
            Ok(bytes) => Some(Bytes::from(bytes)),
            Err(err) => {
                warn!(error = %err, "registration payload could not be encoded");
                None
            }
        }
    }
}

/// Registration mapping for the given fields; see [`RegistrationPayload::to_map`].
pub fn build_registration(
    alias: Option<String>,
    tags: Option<Vec<String>>,
    time_zone: Option<String>,
    quiet_time: Option<JsonMap>,
    badge: Option<i64>,
) -> JsonMap {
    RegistrationPayload::new(alias, tags, time_zone, quiet_time, badge).to_map()
}
