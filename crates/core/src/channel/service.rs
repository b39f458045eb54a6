//! Channel directory service.
//!
//! Validates caller input, applies the creation rules and delegates to a
//! [`NotificationChannelRepository`]. This is the seam other components
//! compose with; handlers and storage are details behind it.

use std::sync::Arc;

use crate::storage::NotificationChannelRepository;

use super::error::Result;
use super::types::NotificationChannel;
use super::validation::{validate_new_channel, validate_user_id};

/// New channels are always created active.
const NEW_CHANNEL_IS_ACTIVE: bool = true;

#[derive(Clone)]
pub struct NotificationChannelService {
    repository: Arc<dyn NotificationChannelRepository>,
}

impl NotificationChannelService {
    pub fn new(repository: Arc<dyn NotificationChannelRepository>) -> Self {
        Self { repository }
    }

    /// Creates an active channel for the user.
    ///
    /// A channel with the same `channel_type` already stored for the user is
    /// replaced.
    pub async fn create_notification_channel(
        &self,
        user_id: &str,
        channel_type: &str,
        identifier: &str,
    ) -> Result<NotificationChannel> {
        if let Err(err) = validate_new_channel(user_id, channel_type, identifier) {
            tracing::warn!(user_id, error = %err, "Rejected notification channel creation");
            return Err(err);
        }

        tracing::info!(user_id, channel_type, "Creating notification channel");

        self.repository
            .create_notification_channel(user_id, channel_type, identifier, NEW_CHANNEL_IS_ACTIVE)
            .await
    }

    /// Lists every channel of the user. An unknown user yields an empty list.
    pub async fn get_notification_channels(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationChannel>> {
        if let Err(err) = validate_user_id(user_id) {
            tracing::warn!(error = %err, "Rejected notification channel listing");
            return Err(err);
        }

        tracing::info!(user_id, "Getting notification channels");

        self.repository.get_notification_channels(user_id).await
    }
}
