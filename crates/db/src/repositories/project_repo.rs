//! Repository for the `projects` table.

use contentforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectStatus, ProjectSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, title, description, content_type, prompt, status, result, created_at, updated_at";

/// Columns exposed by the listing endpoint.
const SUMMARY_COLUMNS: &str =
    "id, title, description, content_type, status, created_at, updated_at";

/// Cap on rows returned by a single listing query.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Provides persistence operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in the `processing` state, returning the row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, title, description, content_type, prompt, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content_type)
            .bind(&input.prompt)
            .bind(ProjectStatus::Processing.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store a generation result, moving the project to `completed`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_result(
        pool: &PgPool,
        id: DbId,
        result: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects
             SET result = $2, status = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(result)
            .bind(ProjectStatus::Completed.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recently created first.
    ///
    /// `limit` is clamped to [`DEFAULT_LIST_LIMIT`]. An empty result is an
    /// empty vec, not an error.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM projects
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(user_id)
            .bind(limit.clamp(1, DEFAULT_LIST_LIMIT))
            .fetch_all(pool)
            .await
    }
}
