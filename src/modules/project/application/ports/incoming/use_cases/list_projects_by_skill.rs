use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::modules::project::application::ports::outgoing::ProjectWithTechnologies;
use crate::shared::pagination::PageRequest;

#[async_trait]
pub trait ListProjectsBySkillUseCase: Send + Sync {
    /// An unknown skill name, or a skill without projects, yields an empty list.
    async fn execute(
        &self,
        profile_id: i32,
        skill_name: &str,
        page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError>;
}
