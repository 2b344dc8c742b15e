use async_trait::async_trait;

use crate::modules::cv_profile::application::ports::outgoing::CvProfileQuery;
use crate::modules::cv_profile::application::use_cases::{
    GetCvProfileError, GetCvProfileUseCase,
};
use crate::modules::cv_profile::domain::entities::CvProfileDetails;
use crate::shared::pagination::PageRequest;

/// Number of education rows nested into the profile view.
const EDUCATION_LIMIT: u64 = 5;

pub struct GetCvProfileService<Q>
where
    Q: CvProfileQuery,
{
    query: Q,
}

impl<Q> GetCvProfileService<Q>
where
    Q: CvProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvProfileUseCase for GetCvProfileService<Q>
where
    Q: CvProfileQuery + Send + Sync,
{
    async fn execute(&self, profile_id: i32) -> Result<CvProfileDetails, GetCvProfileError> {
        let profile = self.query.get_by_id(profile_id).await?;

        let education = self
            .query
            .list_educations(profile_id, PageRequest::first(EDUCATION_LIMIT))
            .await?;

        Ok(CvProfileDetails { profile, education })
    }
}
