use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CvProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin_url: Option<String>,
    pub github_url: String,
    pub bio: String,
    pub profile_picture: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CvEducation {
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cv_profile_id: i32,
}

/// Profile fields with the education list nested under `education`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CvProfileDetails {
    #[serde(flatten)]
    pub profile: CvProfile,
    pub education: Vec<CvEducation>,
}
