use std::time::Duration;

use async_trait::async_trait;

use super::deadline::{within_deadline, DEFAULT_AGGREGATION_TIMEOUT};
use super::technology_join::{attach_technologies, TechnologyFetchStrategy};
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsBySkillUseCase, ListProjectsError,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectWithTechnologies};
use crate::shared::pagination::PageRequest;

// ============================================================================
// Service Implementation
// ============================================================================

/// Projects of a profile linked to a named skill, enriched like
/// [`super::ListProjectsWithTechnologiesService`].
pub struct ListProjectsBySkillService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    strategy: TechnologyFetchStrategy,
    deadline: Duration,
}

impl<Q> ListProjectsBySkillService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            strategy: TechnologyFetchStrategy::default(),
            deadline: DEFAULT_AGGREGATION_TIMEOUT,
        }
    }

    pub fn with_strategy(mut self, strategy: TechnologyFetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

#[async_trait]
impl<Q> ListProjectsBySkillUseCase for ListProjectsBySkillService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: i32,
        skill_name: &str,
        page: PageRequest,
    ) -> Result<Vec<ProjectWithTechnologies>, ListProjectsError> {
        let work = async {
            if !self.query.profile_exists(profile_id).await? {
                return Err(ListProjectsError::ProfileNotFound);
            }

            let project_ids = self
                .query
                .list_project_ids_for_skill(profile_id, skill_name)
                .await?;
            if project_ids.is_empty() {
                return Ok(Vec::new());
            }

            let projects = self.query.list_by_ids(profile_id, &project_ids, page).await?;
            let enriched = attach_technologies(&self.query, projects, self.strategy).await?;

            Ok::<_, ListProjectsError>(enriched)
        };

        within_deadline(self.deadline, work).await
    }
}
