use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQueryError;
use crate::modules::skill::domain::entities::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSkillsError {
    #[error("CV profile not found")]
    ProfileNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for ListSkillsError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::DatabaseError(msg) => ListSkillsError::QueryFailed(msg),
            // list_by_profile never reports a missing skill; the profile
            // check is done explicitly by the service.
            SkillQueryError::NotFound => ListSkillsError::QueryFailed("Not found".to_string()),
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self, profile_id: i32) -> Result<Vec<Skill>, ListSkillsError>;
}
