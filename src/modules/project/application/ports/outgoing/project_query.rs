// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Project columns as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image: String,
    pub hex_theme_color: String,
    pub project_url: String,
    pub significance: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnologyItem {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub order_field: i32,
}

/// A project enriched with its technologies, ordered by `order_field`.
/// `technologies_used` is always present, empty when nothing is linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectWithTechnologies {
    #[serde(flatten)]
    pub project: ProjectRow,
    pub technologies_used: Vec<TechnologyItem>,
}

/// One row of the batched technology lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedTechnology {
    pub project_id: i32,
    pub technology: TechnologyItem,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins the junction tables)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn profile_exists(&self, profile_id: i32) -> Result<bool, ProjectQueryError>;

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectRow, ProjectQueryError>;

    /// Page of a profile's projects, ordered by id.
    async fn list_by_profile(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError>;

    /// Ids of projects linked to the profile's skill named exactly `skill_name`.
    async fn list_project_ids_for_skill(
        &self,
        profile_id: i32,
        skill_name: &str,
    ) -> Result<Vec<i32>, ProjectQueryError>;

    /// Page over the given ids, restricted to the profile, ordered by id.
    async fn list_by_ids(
        &self,
        profile_id: i32,
        project_ids: &[i32],
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError>;

    /// Ordered by `order_field`, then technology id.
    async fn list_technologies_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<TechnologyItem>, ProjectQueryError>;

    /// Same ordering as `list_technologies_for_project` within each project.
    async fn list_technologies_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<LinkedTechnology>, ProjectQueryError>;
}
