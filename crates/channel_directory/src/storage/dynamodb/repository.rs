//! DynamoDB repository implementation.
//!
//! Implements `NotificationChannelRepository` from
//! `channel_directory_core::storage` on a single table keyed by `pk`/`sk`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use channel_directory_core::channel::{
    validate_new_channel, validate_user_id, NotificationChannel, Result,
};
use channel_directory_core::storage::{keys, NotificationChannelRepository};

use super::conversions::{channel_to_item, item_to_channel};
use super::error::{map_put_item_error, map_query_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from explicit configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region,
    /// and the configured endpoint when one is set (local DynamoDB).
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = load_sdk_config(config).await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Loads the SDK configuration for `config`.
///
/// SDK retries are disabled: a failed storage call surfaces on its first
/// attempt.
async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}

#[async_trait]
impl NotificationChannelRepository for DynamoDbRepository {
    async fn create_notification_channel(
        &self,
        user_id: &str,
        channel_type: &str,
        identifier: &str,
        is_active: bool,
    ) -> Result<NotificationChannel> {
        if let Err(err) = validate_new_channel(user_id, channel_type, identifier) {
            tracing::warn!(error = %err, "Refusing to store notification channel");
            return Err(err);
        }

        let channel =
            NotificationChannel::new(user_id, channel_type, identifier, is_active, Utc::now());
        let item = channel_to_item(&channel);

        tracing::debug!(
            user_id,
            channel_type,
            table = %self.table_name,
            "Putting notification channel item"
        );

        // Unconditional write: the same (user, channel type) overwrites.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| {
                let err = map_put_item_error(e);
                tracing::error!(user_id, error = %err, "Failed to store notification channel");
                err
            })?;

        tracing::info!(user_id, channel_type, "Created notification channel");
        Ok(channel)
    }

    async fn get_notification_channels(&self, user_id: &str) -> Result<Vec<NotificationChannel>> {
        if let Err(err) = validate_user_id(user_id) {
            tracing::warn!(error = %err, "Refusing to query notification channels");
            return Err(err);
        }

        let mut channels = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk AND begins_with(#sk, :sk_prefix)")
                .expression_attribute_names("#pk", keys::PK)
                .expression_attribute_names("#sk", keys::SK)
                .expression_attribute_values(":pk", AttributeValue::S(keys::user_pk(user_id)))
                .expression_attribute_values(
                    ":sk_prefix",
                    AttributeValue::S(keys::notification_channel_sk_prefix().to_string()),
                )
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|e| {
                    let err = map_query_error(e);
                    tracing::error!(user_id, error = %err, "Failed to query notification channels");
                    err
                })?;

            for item in result.items.unwrap_or_default() {
                channels.push(item_to_channel(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(user_id, count = channels.len(), "Retrieved notification channels");
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
    use channel_directory_core::channel::ChannelError;

    use super::*;

    /// Repository whose client points at a port nothing listens on.
    fn offline_repository() -> DynamoDbRepository {
        let sdk_config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url("http://127.0.0.1:9")
            .credentials_provider(Credentials::new("test", "test", None, None, "static"))
            .retry_config(aws_sdk_dynamodb::config::retry::RetryConfig::disabled())
            .build();

        DynamoDbRepository::new(Client::from_conf(sdk_config), "t")
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields_before_writing() {
        let repo = offline_repository();

        let cases = [
            ("", "DISCORD", "123456789", "userId"),
            ("user123", " ", "123456789", "channelType"),
            ("user123", "DISCORD", "", "identifier"),
        ];

        for (user_id, channel_type, identifier, field) in cases {
            let err = repo
                .create_notification_channel(user_id, channel_type, identifier, true)
                .await
                .unwrap_err();
            assert_eq!(err, ChannelError::InvalidInput { field });
        }
    }

    #[tokio::test]
    async fn test_get_rejects_blank_user_id_before_querying() {
        let repo = offline_repository();

        let err = repo.get_notification_channels("\t ").await.unwrap_err();

        assert_eq!(err, ChannelError::InvalidInput { field: "userId" });
    }

    #[tokio::test]
    async fn test_sdk_config_disables_retries() {
        let config = Config {
            endpoint_url: Some("http://localhost:8000".to_string()),
            ..Config::default()
        };

        let sdk_config = load_sdk_config(&config).await;

        let retry = sdk_config.retry_config().unwrap();
        assert_eq!(retry.max_attempts(), 1);
        assert_eq!(sdk_config.region(), Some(&Region::new("us-east-1")));
    }

    #[test]
    fn test_table_name() {
        assert_eq!(offline_repository().table_name(), "t");
    }
}
