//! Create notification channel handler.

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use channel_directory_core::channel::{
    CreateNotificationChannelRequest, CreateNotificationChannelResponse,
};

use super::{user_id_from_path, ApiError};
use crate::state::AppState;

pub const CREATE_FALLBACK_MESSAGE: &str = "Error creating notification channel";

/// Create a notification channel (POST /users/{userId}/notification-channels).
///
/// Answers 200 with the stored channel, without timestamps.
pub async fn create_notification_channel(
    State(state): State<AppState>,
    path: Result<Path<HashMap<String, String>>, PathRejection>,
    body: Result<Json<CreateNotificationChannelRequest>, JsonRejection>,
) -> Result<Json<CreateNotificationChannelResponse>, ApiError> {
    let user_id = user_id_from_path(path, CREATE_FALLBACK_MESSAGE)?;
    let Json(request) =
        body.map_err(|e| ApiError::malformed(e.body_text(), CREATE_FALLBACK_MESSAGE))?;

    let channel = state
        .channels
        .create_notification_channel(&user_id, request.channel_type(), request.identifier())
        .await
        .map_err(|e| ApiError::channel(e, CREATE_FALLBACK_MESSAGE))?;

    tracing::info!(
        user_id = %channel.user_id,
        channel_type = %channel.channel_type,
        "Notification channel created"
    );

    Ok(Json(channel.into()))
}
