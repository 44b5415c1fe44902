//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /   -> list_by_user
/// POST /   -> generate
/// ```
///
/// Any other verb hits [`method_not_allowed`].
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(project::list_by_user)
            .post(project::generate)
            .fallback(method_not_allowed),
    )
}
