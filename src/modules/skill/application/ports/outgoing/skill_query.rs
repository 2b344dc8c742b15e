// src/modules/skill/application/ports/outgoing/skill_query.rs

use async_trait::async_trait;

use crate::modules::skill::domain::entities::Skill;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn profile_exists(&self, profile_id: i32) -> Result<bool, SkillQueryError>;

    async fn get_by_id(&self, skill_id: i32) -> Result<Skill, SkillQueryError>;

    /// Skills owned by a profile, ordered by id.
    async fn list_by_profile(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Skill>, SkillQueryError>;
}
