//! Wire keys used in registration and push payloads

/// Tag list, used when there are zero or several tags
pub const MULTIPLE_TAGS_KEY: &str = "tags";
/// Lone tag, used when exactly one tag is set
pub const SINGLE_TAG_KEY: &str = "tag";
/// Device alias
pub const ALIAS_KEY: &str = "alias";
/// Quiet-time window mapping
pub const QUIET_TIME_KEY: &str = "quiettime";
/// IANA time zone name
pub const TIME_ZONE_KEY: &str = "tz";
/// Application badge count
pub const BADGE_KEY: &str = "badge";

/// Start of the quiet-time window
pub const QUIET_TIME_START_KEY: &str = "start";
/// End of the quiet-time window
pub const QUIET_TIME_END_KEY: &str = "end";

/// Alert text in a push payload
pub const ALERT_KEY: &str = "alert";
/// Device token audience selector
pub const DEVICE_TOKEN_KEY: &str = "device_token";
/// Named user audience selector
pub const NAMED_USER_KEY: &str = "named_user";
/// Channel audience selector
pub const CHANNEL_KEY: &str = "channel";
/// Broadcast marker key
pub const AUDIENCE_KEY: &str = "audience";
/// Broadcast marker value
pub const BROADCAST_AUDIENCE: &str = "all";
