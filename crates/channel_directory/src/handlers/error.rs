//! Translation of handler failures into API responses.
//!
//! Every failure is answered with `400 {"message": ...}`. Validation
//! messages are returned verbatim; anything else is replaced by the
//! operation's fallback message and only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use channel_directory_core::channel::{ChannelError, ErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be parsed (bad JSON, missing path parameter).
    #[error("Malformed request: {reason}")]
    MalformedRequest {
        reason: String,
        fallback: &'static str,
    },
    /// The service rejected the request or storage failed.
    #[error("{source}")]
    Channel {
        source: ChannelError,
        fallback: &'static str,
    },
}

impl ApiError {
    pub fn malformed(reason: impl Into<String>, fallback: &'static str) -> Self {
        ApiError::MalformedRequest {
            reason: reason.into(),
            fallback,
        }
    }

    pub fn channel(source: ChannelError, fallback: &'static str) -> Self {
        ApiError::Channel { source, fallback }
    }

    /// Message safe to show to the caller.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Channel {
                source: source @ ChannelError::InvalidInput { .. },
                ..
            } => source.to_string(),
            ApiError::Channel { fallback, .. } | ApiError::MalformedRequest { fallback, .. } => {
                fallback.to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MalformedRequest { reason, .. } => {
                tracing::warn!(reason = %reason, "Malformed request");
            }
            ApiError::Channel {
                source: ChannelError::InvalidInput { field },
                ..
            } => {
                tracing::warn!(field = *field, "Invalid input");
            }
            ApiError::Channel { source, .. } => {
                tracing::error!(error = %source, "Storage error");
            }
        }

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(self.client_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use channel_directory_core::storage::RepositoryError;

    use super::*;

    const FALLBACK: &str = "Error creating notification channel";

    #[test]
    fn test_invalid_input_message_is_surfaced() {
        let error = ApiError::channel(
            ChannelError::InvalidInput {
                field: "channelType",
            },
            FALLBACK,
        );

        assert_eq!(error.client_message(), "channelType cannot be null or empty");
    }

    #[test]
    fn test_storage_error_is_replaced_by_fallback() {
        let error = ApiError::channel(
            RepositoryError::QueryFailed("Table not found".to_string()).into(),
            FALLBACK,
        );

        assert_eq!(error.client_message(), FALLBACK);
    }

    #[test]
    fn test_malformed_request_uses_fallback() {
        let error = ApiError::malformed("expected value at line 1 column 1", FALLBACK);

        assert_eq!(error.client_message(), FALLBACK);
        assert_eq!(
            error.to_string(),
            "Malformed request: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_into_response_is_bad_request() {
        let response = ApiError::malformed("missing userId", FALLBACK).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
