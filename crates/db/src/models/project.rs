//! Project entity model and DTOs.

use contentforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle state of a project.
///
/// A row starts in `Processing` and moves to `Completed` exactly once, when
/// its result is stored. There is no reverse transition and no failure
/// state: a project whose generation failed stays in `Processing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Processing,
    Completed,
}

impl ProjectStatus {
    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A project row from the `projects` table.
///
/// The `content_type` column is serialized as `"type"` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub content_type: String,
    pub prompt: String,
    pub status: String,
    pub result: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Project fields returned by the listing endpoint.
///
/// Excludes `prompt` and `result`, which can be large.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub content_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Rows always start in `Processing`.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub prompt: String,
}

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /api/v1/projects`.
///
/// Every field is optional at the transport layer; required-field checks
/// happen in `contentforge_core::request::validate_generate` so a missing
/// field produces a 400 naming the field rather than a deserialization
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Option<DbId>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub prompt: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Response for a successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub project_id: DbId,
    pub result: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    pub status: ProjectStatus,
}

/// Response envelope for the project listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}
