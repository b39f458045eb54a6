use axum::Json;
use serde_json::{json, Value};

/// GET /health - Liveness probe. Does not touch storage.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
