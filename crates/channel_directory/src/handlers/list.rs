//! List notification channels handler.

use std::collections::HashMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use channel_directory_core::channel::GetNotificationChannelsResponse;

use super::{user_id_from_path, ApiError};
use crate::state::AppState;

pub const LIST_FALLBACK_MESSAGE: &str = "Error getting notification channels";

/// List a user's notification channels (GET /users/{userId}/notification-channels).
pub async fn list_notification_channels(
    State(state): State<AppState>,
    path: Result<Path<HashMap<String, String>>, PathRejection>,
) -> Result<Json<GetNotificationChannelsResponse>, ApiError> {
    let user_id = user_id_from_path(path, LIST_FALLBACK_MESSAGE)?;

    let notification_channels = state
        .channels
        .get_notification_channels(&user_id)
        .await
        .map_err(|e| ApiError::channel(e, LIST_FALLBACK_MESSAGE))?;

    tracing::debug!(
        user_id = %user_id,
        count = notification_channels.len(),
        "Listed notification channels"
    );

    Ok(Json(GetNotificationChannelsResponse {
        notification_channels,
    }))
}
