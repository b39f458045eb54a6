use std::env;

/// Default DynamoDB table holding notification channels.
pub const DEFAULT_TABLE_NAME: &str = "notification-channels";
/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Storage configuration, passed explicitly to the repository factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table name (default: "notification-channels")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL, for local DynamoDB (default: none)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTIFICATION_CHANNEL_TABLE_NAME` - Table name (default: "notification-channels")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("NOTIFICATION_CHANNEL_TABLE_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: lookup("AWS_REGION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Returns a display string for the storage target.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Process-local store, lost on restart.
    Memory,
    /// DynamoDB table described by [`Config`].
    #[cfg(feature = "dynamodb")]
    Dynamodb,
}

impl Default for StorageBackend {
    #[cfg(feature = "dynamodb")]
    fn default() -> Self {
        StorageBackend::Dynamodb
    }

    #[cfg(not(feature = "dynamodb"))]
    fn default() -> Self {
        StorageBackend::Memory
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.table_name, "notification-channels");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NOTIFICATION_CHANNEL_TABLE_NAME", "goal-tracker-prod"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config,
            Config {
                table_name: "goal-tracker-prod".to_string(),
                region: "eu-west-1".to_string(),
                endpoint_url: Some("http://localhost:8000".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_target_display() {
        let mut config = Config::default();
        assert_eq!(config.target_display(), "AWS DynamoDB (region: us-east-1)");

        config.endpoint_url = Some("http://localhost:8000".to_string());
        assert_eq!(config.target_display(), "Local DynamoDB (http://localhost:8000)");
    }
}
