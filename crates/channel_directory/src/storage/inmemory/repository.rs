//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use channel_directory_core::channel::{
    validate_new_channel, validate_user_id, NotificationChannel, Result,
};
use channel_directory_core::storage::{keys, NotificationChannelRepository};

/// Records of one partition, ordered by sort key.
type Partition = BTreeMap<String, NotificationChannel>;

/// In-memory storage backend.
///
/// Uses a `BTreeMap` per partition key wrapped in `Arc<RwLock<_>>` for
/// thread-safe access. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    partitions: Arc<RwLock<BTreeMap<String, Partition>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored across all partitions.
    #[cfg(test)]
    pub async fn record_count(&self) -> usize {
        self.partitions.read().await.values().map(BTreeMap::len).sum()
    }
}

#[async_trait]
impl NotificationChannelRepository for InMemoryRepository {
    async fn create_notification_channel(
        &self,
        user_id: &str,
        channel_type: &str,
        identifier: &str,
        is_active: bool,
    ) -> Result<NotificationChannel> {
        validate_new_channel(user_id, channel_type, identifier)?;

        let channel =
            NotificationChannel::new(user_id, channel_type, identifier, is_active, Utc::now());

        let mut partitions = self.partitions.write().await;
        partitions
            .entry(keys::user_pk(user_id))
            .or_default()
            .insert(keys::notification_channel_sk(channel_type), channel.clone());

        tracing::debug!(user_id, channel_type, "Stored notification channel in memory");
        Ok(channel)
    }

    async fn get_notification_channels(&self, user_id: &str) -> Result<Vec<NotificationChannel>> {
        validate_user_id(user_id)?;

        let prefix = keys::notification_channel_sk_prefix();
        let partitions = self.partitions.read().await;

        let channels: Vec<NotificationChannel> = partitions
            .get(&keys::user_pk(user_id))
            .map(|partition| {
                partition
                    .range(prefix.to_string()..)
                    .take_while(|(sk, _)| sk.starts_with(prefix))
                    .map(|(_, channel)| channel.clone())
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!(user_id, count = channels.len(), "Retrieved notification channels");
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use channel_directory_core::channel::ChannelError;

    use super::*;

    #[tokio::test]
    async fn test_create_returns_what_was_stored() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create_notification_channel("user123", "DISCORD", "123456789", false)
            .await
            .unwrap();
        let listed = repo.get_notification_channels("user123").await.unwrap();

        assert!(!created.is_active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_same_type_overwrites() {
        let repo = InMemoryRepository::new();

        repo.create_notification_channel("user123", "DISCORD", "first", true)
            .await
            .unwrap();
        repo.create_notification_channel("user123", "DISCORD", "second", true)
            .await
            .unwrap();

        let listed = repo.get_notification_channels("user123").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].identifier, "second");
        assert_eq!(repo.record_count().await, 1);
    }

    #[tokio::test]
    async fn test_channels_are_scoped_per_user() {
        let repo = InMemoryRepository::new();

        repo.create_notification_channel("alice", "EMAIL", "alice@example.com", true)
            .await
            .unwrap();
        repo.create_notification_channel("alice", "SMS", "+15555550100", true)
            .await
            .unwrap();
        repo.create_notification_channel("bob", "EMAIL", "bob@example.com", true)
            .await
            .unwrap();

        let alice = repo.get_notification_channels("alice").await.unwrap();
        let types: Vec<&str> = alice.iter().map(|c| c.channel_type.as_str()).collect();
        assert_eq!(types, vec!["EMAIL", "SMS"]);

        let bob = repo.get_notification_channels("bob").await.unwrap();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].identifier, "bob@example.com");
    }

    #[tokio::test]
    async fn test_list_ignores_other_entity_kinds_in_partition() {
        let repo = InMemoryRepository::new();
        repo.create_notification_channel("user123", "DISCORD", "123456789", true)
            .await
            .unwrap();

        // A record of another kind sharing the user's partition.
        repo.partitions
            .write()
            .await
            .entry(keys::user_pk("user123"))
            .or_default()
            .insert(
                "GOAL#abc".to_string(),
                NotificationChannel::new("user123", "GOAL", "abc", true, Utc::now()),
            );

        let listed = repo.get_notification_channels("user123").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].channel_type, "DISCORD");
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let repo = InMemoryRepository::new();

        assert!(repo.get_notification_channels("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_blank_input_without_writing() {
        let repo = InMemoryRepository::new();

        let err = repo
            .create_notification_channel("user123", "DISCORD", "   ", true)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ChannelError::InvalidInput {
                field: "identifier"
            }
        );

        let err = repo.get_notification_channels(" ").await.unwrap_err();
        assert_eq!(err, ChannelError::InvalidInput { field: "userId" });
        assert_eq!(repo.record_count().await, 0);
    }
}
