use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        create::create_notification_channel, health::health, list::list_notification_channels,
    },
    state::AppState,
};

/// Route serving both channel operations.
pub const NOTIFICATION_CHANNELS_PATH: &str = "/users/{userId}/notification-channels";

/// Which channel handlers a deployment mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HandlerSet {
    /// Create and list.
    #[default]
    All,
    /// Only POST (create).
    Create,
    /// Only GET (list).
    List,
}

impl HandlerSet {
    pub fn serves_create(self) -> bool {
        matches!(self, HandlerSet::All | HandlerSet::Create)
    }

    pub fn serves_list(self) -> bool {
        matches!(self, HandlerSet::All | HandlerSet::List)
    }
}

/// Create the application router with the selected handlers and request tracing.
///
/// No request deadline is imposed here; a storage call either returns or
/// fails, and every failure is answered through `ApiError`.
pub fn create_app(state: AppState, handlers: HandlerSet) -> Router {
    let mut channel_routes: MethodRouter<AppState> = MethodRouter::new();
    if handlers.serves_create() {
        channel_routes = channel_routes.post(create_notification_channel);
    }
    if handlers.serves_list() {
        channel_routes = channel_routes.get(list_notification_channels);
    }

    Router::new()
        .route("/health", get(health))
        .route(NOTIFICATION_CHANNELS_PATH, channel_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
