// src/modules/cv_profile/application/ports/outgoing/cv_profile_query.rs

use async_trait::async_trait;

use crate::modules::cv_profile::domain::entities::{CvEducation, CvProfile};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvProfileQueryError {
    #[error("CV profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CvProfileQuery: Send + Sync {
    async fn get_by_id(&self, profile_id: i32) -> Result<CvProfile, CvProfileQueryError>;

    /// Education rows for a profile, ordered by id. An existing profile
    /// without education yields an empty list.
    async fn list_educations(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<CvEducation>, CvProfileQueryError>;
}
