use async_trait::async_trait;

use crate::modules::cv_profile::application::ports::outgoing::CvProfileQueryError;
use crate::modules::cv_profile::domain::entities::CvProfileDetails;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvProfileError {
    #[error("CV profile not found")]
    ProfileNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CvProfileQueryError> for GetCvProfileError {
    fn from(err: CvProfileQueryError) -> Self {
        match err {
            CvProfileQueryError::NotFound => GetCvProfileError::ProfileNotFound,
            CvProfileQueryError::DatabaseError(msg) => GetCvProfileError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetCvProfileUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<CvProfileDetails, GetCvProfileError>;
}
