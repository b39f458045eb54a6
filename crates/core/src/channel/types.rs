use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification delivery destination configured for a user.
///
/// A user holds at most one channel per `channel_type`; writing the same
/// pair again replaces the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
    pub user_id: String,
    /// Open tag such as `DISCORD`, `EMAIL` or `SMS`.
    pub channel_type: String,
    /// Channel-specific address (Discord channel id, email, phone number).
    pub identifier: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationChannel {
    /// Creates a channel stamped with `now` for both timestamps.
    pub fn new(
        user_id: impl Into<String>,
        channel_type: impl Into<String>,
        identifier: impl Into<String>,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            channel_type: channel_type.into(),
            identifier: identifier.into(),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
