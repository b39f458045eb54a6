//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use channel_directory_core::channel::NotificationChannel;
use channel_directory_core::storage::{keys, RepositoryError};
use chrono::{DateTime, Utc};

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_USER_ID: &str = "userId";
pub const ATTR_CHANNEL_TYPE: &str = "channelType";
pub const ATTR_IDENTIFIER: &str = "identifier";
pub const ATTR_IS_ACTIVE: &str = "isActive";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

// ============================================================================
// Notification channel conversions
// ============================================================================

/// Convert a NotificationChannel to DynamoDB item.
pub fn channel_to_item(channel: &NotificationChannel) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        keys::PK.to_string(),
        AttributeValue::S(keys::user_pk(&channel.user_id)),
    );
    item.insert(
        keys::SK.to_string(),
        AttributeValue::S(keys::notification_channel_sk(&channel.channel_type)),
    );

    // Data
    item.insert(
        ATTR_USER_ID.to_string(),
        AttributeValue::S(channel.user_id.clone()),
    );
    item.insert(
        ATTR_CHANNEL_TYPE.to_string(),
        AttributeValue::S(channel.channel_type.clone()),
    );
    item.insert(
        ATTR_IDENTIFIER.to_string(),
        AttributeValue::S(channel.identifier.clone()),
    );
    item.insert(
        ATTR_IS_ACTIVE.to_string(),
        AttributeValue::Bool(channel.is_active),
    );
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(channel.created_at.to_rfc3339()),
    );
    item.insert(
        ATTR_UPDATED_AT.to_string(),
        AttributeValue::S(channel.updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to NotificationChannel.
pub fn item_to_channel(
    item: &HashMap<String, AttributeValue>,
) -> Result<NotificationChannel, RepositoryError> {
    Ok(NotificationChannel {
        user_id: get_string(item, ATTR_USER_ID)?,
        channel_type: get_string(item, ATTR_CHANNEL_TYPE)?,
        identifier: get_string(item, ATTR_IDENTIFIER)?,
        is_active: get_bool(item, ATTR_IS_ACTIVE)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_datetime(item, ATTR_UPDATED_AT)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_channel() -> NotificationChannel {
        let now = DateTime::parse_from_rfc3339("2024-01-15T10:30:00.123456Z")
            .unwrap()
            .with_timezone(&Utc);
        NotificationChannel::new("user123", "DISCORD", "123456789", true, now)
    }

    #[test]
    fn test_channel_item_has_correct_keys() {
        let item = channel_to_item(&sample_channel());

        assert_eq!(
            item.get("pk").unwrap().as_s().unwrap(),
            "USER#user123"
        );
        assert_eq!(
            item.get("sk").unwrap().as_s().unwrap(),
            "NOTIFICATION#DISCORD"
        );
    }

    #[test]
    fn test_channel_item_attribute_types() {
        let item = channel_to_item(&sample_channel());

        assert_eq!(item.get("userId").unwrap().as_s().unwrap(), "user123");
        assert_eq!(item.get("channelType").unwrap().as_s().unwrap(), "DISCORD");
        assert_eq!(item.get("identifier").unwrap().as_s().unwrap(), "123456789");
        assert!(*item.get("isActive").unwrap().as_bool().unwrap());
        assert_eq!(
            item.get("createdAt").unwrap().as_s().unwrap(),
            item.get("updatedAt").unwrap().as_s().unwrap()
        );
    }

    #[test]
    fn test_item_to_channel_keeps_sub_second_precision() {
        let channel = sample_channel();

        let decoded = item_to_channel(&channel_to_item(&channel)).unwrap();

        assert_eq!(decoded, channel);
    }

    #[test]
    fn test_item_to_channel_missing_field() {
        let mut item = channel_to_item(&sample_channel());
        item.remove("identifier");

        assert_eq!(
            item_to_channel(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: identifier".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_channel_rejects_string_is_active() {
        let mut item = channel_to_item(&sample_channel());
        item.insert("isActive".to_string(), AttributeValue::S("true".to_string()));

        assert!(matches!(
            item_to_channel(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_item_to_channel_invalid_datetime() {
        let mut item = channel_to_item(&sample_channel());
        item.insert(
            "createdAt".to_string(),
            AttributeValue::S("yesterday".to_string()),
        );

        let err = item_to_channel(&item).unwrap_err();
        assert!(err.to_string().contains("Invalid datetime createdAt"));
    }
}
