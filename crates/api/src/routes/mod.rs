pub mod health;
pub mod projects;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects    GET  -> list a user's projects
/// /projects    POST -> generate content and record a project
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", projects::router())
}

/// Fallback for requests that match a route path but not its method.
///
/// CORS preflight (OPTIONS with an `Origin` header) is answered by the CORS
/// middleware before routing, so only genuinely unsupported verbs land here.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "Method not allowed",
            "code": "METHOD_NOT_ALLOWED",
        })),
    )
}
