//! Wire payloads for the create and list operations.
//!
//! These types are shared between the handlers and anything else speaking
//! the same JSON contract. Pure data, no I/O.

use serde::{Deserialize, Serialize};

use super::types::NotificationChannel;

/// Body of a create request.
///
/// Both fields are optional on the wire so that a missing field reaches the
/// service and is rejected with its field-specific message instead of a
/// generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationChannelRequest {
    #[serde(default)]
    pub channel_type: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
}

impl CreateNotificationChannelRequest {
    pub fn new(channel_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            channel_type: Some(channel_type.into()),
            identifier: Some(identifier.into()),
        }
    }

    /// Channel type, with a missing value read as empty.
    pub fn channel_type(&self) -> &str {
        self.channel_type.as_deref().unwrap_or_default()
    }

    /// Identifier, with a missing value read as empty.
    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }
}

/// Body of a successful create response. Timestamps are not echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationChannelResponse {
    pub user_id: String,
    pub channel_type: String,
    pub identifier: String,
    pub is_active: bool,
}

impl From<NotificationChannel> for CreateNotificationChannelResponse {
    fn from(channel: NotificationChannel) -> Self {
        Self {
            user_id: channel.user_id,
            channel_type: channel.channel_type,
            identifier: channel.identifier,
            is_active: channel.is_active,
        }
    }
}

/// Body of a successful list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNotificationChannelsResponse {
    pub notification_channels: Vec<NotificationChannel>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_create_request_parses_camel_case_body() {
        let request: CreateNotificationChannelRequest =
            serde_json::from_str(r#"{"channelType":"DISCORD","identifier":"123456789"}"#).unwrap();

        assert_eq!(request, CreateNotificationChannelRequest::new("DISCORD", "123456789"));
    }

    #[test]
    fn test_create_request_missing_fields_read_as_empty() {
        let request: CreateNotificationChannelRequest =
            serde_json::from_str(r#"{"identifier":null}"#).unwrap();

        assert_eq!(request.channel_type(), "");
        assert_eq!(request.identifier(), "");
    }

    #[test]
    fn test_create_response_shape() {
        let channel = NotificationChannel::new("user123", "DISCORD", "123456789", true, Utc::now());
        let response = CreateNotificationChannelResponse::from(channel);

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"userId":"user123","channelType":"DISCORD","identifier":"123456789","isActive":true}"#
        );
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_string(&ErrorResponse::new("Error getting notification channels"))
            .unwrap();

        assert_eq!(body, r#"{"message":"Error getting notification channels"}"#);
    }
}
