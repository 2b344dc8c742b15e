use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::modules::skill::application::use_cases::{GetSkillError, GetSkillUseCase};
use crate::modules::skill::domain::entities::Skill;

pub struct GetSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillUseCase for GetSkillService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, skill_id: i32) -> Result<Skill, GetSkillError> {
        Ok(self.query.get_by_id(skill_id).await?)
    }
}
