// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;

use crate::modules::skill::domain::entities::Skill;

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub description: String,
    pub category: String,
    pub importance: i32,
    pub image: String,
    pub hex_theme_color: String,
    pub cv_profile_id: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("CV profile not found")]
    ProfileNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;
}
