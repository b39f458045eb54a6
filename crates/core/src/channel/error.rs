use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the channel service and repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// A required field was missing or blank.
    #[error("{field} cannot be null or empty")]
    InvalidInput { field: &'static str },
    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_names_field() {
        assert_eq!(
            ChannelError::InvalidInput { field: "userId" }.to_string(),
            "userId cannot be null or empty"
        );
        assert_eq!(
            ChannelError::InvalidInput {
                field: "channelType"
            }
            .to_string(),
            "channelType cannot be null or empty"
        );
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let error: ChannelError = RepositoryError::QueryFailed("Table not found".to_string()).into();

        assert_eq!(error.to_string(), "storage request failed: Table not found");
        assert!(!matches!(error, ChannelError::InvalidInput { .. }));
    }
}
