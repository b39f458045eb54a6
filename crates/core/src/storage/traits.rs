use async_trait::async_trait;

use crate::channel::{NotificationChannel, Result};

/// Repository for notification channel records.
///
/// Implementations validate their own inputs and report a blank field as
/// [`ChannelError::InvalidInput`](crate::channel::ChannelError::InvalidInput)
/// without touching storage.
#[async_trait]
pub trait NotificationChannelRepository: Send + Sync {
    /// Writes a channel for the user, replacing any channel of the same type.
    ///
    /// Both timestamps are set to the time of the write. The returned value
    /// is exactly what was stored.
    async fn create_notification_channel(
        &self,
        user_id: &str,
        channel_type: &str,
        identifier: &str,
        is_active: bool,
    ) -> Result<NotificationChannel>;

    /// Gets every channel stored for the user, in storage order.
    async fn get_notification_channels(&self, user_id: &str) -> Result<Vec<NotificationChannel>>;
}
