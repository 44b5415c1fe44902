//! Handlers for the `/projects` resource.
//!
//! Routes:
//! - `POST /projects` -- validate, record, generate, store the result
//! - `GET  /projects?user_id=` -- list a user's projects, newest first

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use contentforge_core::content::{self, ContentType};
use contentforge_core::error::CoreError;
use contentforge_core::request;
use contentforge_core::types::DbId;
use contentforge_db::models::project::{
    CreateProject, GenerateRequest, GenerateResponse, ProjectListResponse, ProjectStatus,
};
use contentforge_db::repositories::project_repo::DEFAULT_LIST_LIMIT;
use contentforge_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Validates the request, records the project in `processing`, runs the
/// generator, and stores the result. The row is created before generation
/// so generated content can never exist without a record; the flip side is
/// that a failure after the insert leaves the row in `processing`.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let Json(input) =
        body.map_err(|_| AppError::BadRequest("Invalid JSON in request body".to_string()))?;

    let now = Utc::now();
    let params = request::validate_generate(
        input.user_id,
        input.content_type,
        input.prompt,
        input.title,
        input.description,
        now,
    )?;

    let create = CreateProject {
        user_id: params.user_id,
        title: params.title,
        description: params.description,
        content_type: params.content_type,
        prompt: params.prompt,
    };
    let project = ProjectRepo::create(&state.pool, &create).await?;

    // Parse after the insert: an unrecognized type still leaves a record.
    let content_type: ContentType = project.content_type.parse().map_err(AppError::Core)?;
    let result = content::generate(content_type, &project.prompt, now);

    let completed = ProjectRepo::update_result(&state.pool, project.id, &result)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Project {} vanished before its result could be stored",
                project.id
            ))
        })?;

    Ok(Json(GenerateResponse {
        project_id: completed.id,
        result,
        content_type: completed.content_type,
        title: completed.title,
        status: ProjectStatus::Completed,
    }))
}

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub user_id: Option<DbId>,
}

/// GET /api/v1/projects?user_id=...
pub async fn list_by_user(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> AppResult<Json<ProjectListResponse>> {
    let user_id = query.user_id.ok_or(CoreError::MissingParameter {
        parameter: "user_id",
    })?;

    let projects = ProjectRepo::list_by_user(&state.pool, user_id, DEFAULT_LIST_LIMIT).await?;

    Ok(Json(ProjectListResponse { projects }))
}
