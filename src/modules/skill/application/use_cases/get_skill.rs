use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQueryError;
use crate::modules::skill::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillError {
    #[error("Skill not found")]
    SkillNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::NotFound => GetSkillError::SkillNotFound,
            SkillQueryError::DatabaseError(msg) => GetSkillError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: i32) -> Result<Skill, GetSkillError>;
}
