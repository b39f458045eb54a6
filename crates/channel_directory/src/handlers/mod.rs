use std::collections::HashMap;

use axum::extract::{rejection::PathRejection, Path};

pub mod create;
pub mod error;
pub mod health;
pub mod list;

pub use error::ApiError;

/// Name of the path parameter carrying the user id.
pub const USER_ID_PARAM: &str = "userId";

/// Pull the user id out of the matched path parameters.
///
/// A failed extraction or an absent parameter is a malformed request. A
/// present but blank value is left for the service to reject.
fn user_id_from_path(
    path: Result<Path<HashMap<String, String>>, PathRejection>,
    fallback: &'static str,
) -> Result<String, ApiError> {
    let Path(mut params) = path.map_err(|e| ApiError::malformed(e.body_text(), fallback))?;

    params
        .remove(USER_ID_PARAM)
        .ok_or_else(|| ApiError::malformed("missing userId path parameter", fallback))
}
