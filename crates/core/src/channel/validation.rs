//! Input validation shared by the service and the repositories.

use super::error::{ChannelError, Result};

pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_CHANNEL_TYPE: &str = "channelType";
pub const FIELD_IDENTIFIER: &str = "identifier";

/// Rejects values that are empty or whitespace only.
fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChannelError::InvalidInput { field });
    }
    Ok(())
}

/// Validates a user id.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    require_non_blank(FIELD_USER_ID, user_id)
}

/// Validates the inputs of a channel creation, reporting the first bad field.
pub fn validate_new_channel(user_id: &str, channel_type: &str, identifier: &str) -> Result<()> {
    validate_user_id(user_id)?;
    require_non_blank(FIELD_CHANNEL_TYPE, channel_type)?;
    require_non_blank(FIELD_IDENTIFIER, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank_accepts_value() {
        assert!(require_non_blank(FIELD_USER_ID, "user123").is_ok());
        assert!(require_non_blank(FIELD_USER_ID, "  padded  ").is_ok());
    }

    #[test]
    fn test_require_non_blank_rejects_empty_and_whitespace() {
        for value in ["", " ", "\t\n "] {
            assert_eq!(
                require_non_blank(FIELD_IDENTIFIER, value),
                Err(ChannelError::InvalidInput {
                    field: FIELD_IDENTIFIER
                })
            );
        }
    }

    #[test]
    fn test_validate_new_channel_reports_first_failing_field() {
        assert_eq!(
            validate_new_channel("  ", "", ""),
            Err(ChannelError::InvalidInput {
                field: FIELD_USER_ID
            })
        );
        assert_eq!(
            validate_new_channel("user123", " ", ""),
            Err(ChannelError::InvalidInput {
                field: FIELD_CHANNEL_TYPE
            })
        );
        assert_eq!(
            validate_new_channel("user123", "SMS", ""),
            Err(ChannelError::InvalidInput {
                field: FIELD_IDENTIFIER
            })
        );
        assert!(validate_new_channel("user123", "SMS", "+15555550100").is_ok());
    }
}
