use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::{
    ProjectQueryError, ProjectWithTechnologies,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailsError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectDetailsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetProjectDetailsError::ProjectNotFound,
            ProjectQueryError::DatabaseError(msg) => GetProjectDetailsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetProjectDetailsUseCase: Send + Sync {
    async fn execute(&self, project_id: i32)
        -> Result<ProjectWithTechnologies, GetProjectDetailsError>;
}
