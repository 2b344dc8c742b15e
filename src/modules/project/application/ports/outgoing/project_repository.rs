// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectRow, TechnologyItem,
};

//
// ──────────────────────────────────────────────────────────
// Command data
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image: String,
    pub hex_theme_color: String,
    pub project_url: String,
    pub significance: i32,
    pub cv_profile_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateTechnologyData {
    pub name: String,
    pub url: String,
    pub order_field: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("CV profile not found")]
    ProfileNotFound,

    /// A junction row points at a project, technology or skill that does not exist.
    #[error("Referenced row not found")]
    MissingReference,

    /// The junction pair already exists.
    #[error("Link already exists")]
    DuplicateLink,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Write-side, insert only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: CreateProjectData)
        -> Result<ProjectRow, ProjectRepositoryError>;

    async fn create_technology(
        &self,
        data: CreateTechnologyData,
    ) -> Result<TechnologyItem, ProjectRepositoryError>;

    async fn create_project_technology(
        &self,
        project_id: i32,
        technology_id: i32,
    ) -> Result<(), ProjectRepositoryError>;

    async fn create_project_skill(
        &self,
        project_id: i32,
        skill_id: i32,
    ) -> Result<(), ProjectRepositoryError>;
}
