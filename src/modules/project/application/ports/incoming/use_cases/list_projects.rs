use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::{
    ProjectQueryError, ProjectWithTechnologies,
};
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Failure of an enriched project listing. Shared by the plain and the
/// skill-filtered listing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("CV profile not found")]
    ProfileNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Aggregation cancelled: {0}")]
    Cancelled(String),
}

impl From<ProjectQueryError> for ListProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => ListProjectsError::QueryFailed(msg),
            // list reads report an empty page, not NotFound
            ProjectQueryError::NotFound => ListProjectsError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError>;
}
