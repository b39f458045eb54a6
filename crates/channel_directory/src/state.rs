//! Application state and service composition.
//!
//! The repository is built from explicit configuration, injected into the
//! service, and the service is shared with every handler through axum
//! `State`. No process-wide globals are involved.

use std::sync::Arc;

use channel_directory_core::channel::NotificationChannelService;
use channel_directory_core::storage::NotificationChannelRepository;

use crate::config::{Config, StorageBackend};
use crate::storage::InMemoryRepository;

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub channels: NotificationChannelService,
}

impl AppState {
    /// Creates state around an already-built service.
    pub fn new(channels: NotificationChannelService) -> Self {
        Self { channels }
    }

    /// Creates state whose service uses the given repository.
    pub fn with_repository(repository: Arc<dyn NotificationChannelRepository>) -> Self {
        Self::new(NotificationChannelService::new(repository))
    }

    /// Creates state backed by a fresh in-memory repository.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}

/// Builds the repository for `backend`, then the service and state around it.
pub async fn build_state(config: &Config, backend: StorageBackend) -> AppState {
    let repository: Arc<dyn NotificationChannelRepository> = match backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryRepository::new())
        }
        #[cfg(feature = "dynamodb")]
        StorageBackend::Dynamodb => {
            let repository = crate::storage::DynamoDbRepository::from_config(config).await;
            tracing::info!(
                table = repository.table_name(),
                target = %config.target_display(),
                "Using DynamoDB storage"
            );
            Arc::new(repository)
        }
    };

    #[cfg(not(feature = "dynamodb"))]
    let _ = config;

    AppState::with_repository(repository)
}
