//! Storage key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. One user partition can hold several entity kinds;
//! each kind owns a sort-key prefix so a `begins_with` scan selects exactly
//! that kind.

// ============================================================================
// Key attribute names
// ============================================================================

pub const PK: &str = "pk";
pub const SK: &str = "sk";

// ============================================================================
// Key prefixes
// ============================================================================

pub const USER_PREFIX: &str = "USER#";
pub const NOTIFICATION_PREFIX: &str = "NOTIFICATION#";

// ============================================================================
// User keys
// ============================================================================

/// Generate the partition key shared by every record of a user.
///
/// Pattern: `USER#<user_id>`
pub fn user_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

// ============================================================================
// Notification channel keys
// ============================================================================

/// Generate sort key for a notification channel.
///
/// Pattern: `NOTIFICATION#<channel_type>`
///
/// One record per (user, channel type): writing the same pair overwrites.
pub fn notification_channel_sk(channel_type: &str) -> String {
    format!("{NOTIFICATION_PREFIX}{channel_type}")
}

/// Sort key prefix for querying all notification channels of a user.
///
/// Pattern: `NOTIFICATION#`
pub fn notification_channel_sk_prefix() -> &'static str {
    NOTIFICATION_PREFIX
}
