use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::modules::skill::application::use_cases::{ListSkillsError, ListSkillsUseCase};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::pagination::PageRequest;

/// Upper bound on skills returned for a single profile.
pub const SKILL_LIST_LIMIT: u64 = 50;

pub struct ListSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, profile_id: i32) -> Result<Vec<Skill>, ListSkillsError> {
        if !self.query.profile_exists(profile_id).await? {
            return Err(ListSkillsError::ProfileNotFound);
        }

        let skills = self
            .query
            .list_by_profile(profile_id, PageRequest::first(SKILL_LIST_LIMIT))
            .await?;

        Ok(skills)
    }
}
