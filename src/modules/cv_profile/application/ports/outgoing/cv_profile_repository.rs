// src/modules/cv_profile/application/ports/outgoing/cv_profile_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::cv_profile::domain::entities::{CvEducation, CvProfile};

#[derive(Debug, Clone)]
pub struct CreateCvProfileData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin_url: Option<String>,
    pub github_url: String,
    pub bio: String,
    pub profile_picture: String,
}

#[derive(Debug, Clone)]
pub struct CreateCvEducationData {
    pub institution: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cv_profile_id: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvProfileRepositoryError {
    /// Referenced profile does not exist (foreign key violation).
    #[error("CV profile not found")]
    ProfileNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, inserts only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CvProfileRepository: Send + Sync {
    async fn create_profile(
        &self,
        data: CreateCvProfileData,
    ) -> Result<CvProfile, CvProfileRepositoryError>;

    async fn create_education(
        &self,
        data: CreateCvEducationData,
    ) -> Result<CvEducation, CvProfileRepositoryError>;
}
