// src/modules/skill/adapter/outgoing/skill_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError,
};
use crate::modules::skill::domain::entities::Skill;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError> {
        let active = skills::ActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            category: Set(data.category),
            importance: Set(data.importance),
            image: Set(data.image),
            hex_theme_color: Set(data.hex_theme_color),
            cv_profile_id: Set(data.cv_profile_id),
            ..Default::default()
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => SkillRepositoryError::ProfileNotFound,
        _ => SkillRepositoryError::DatabaseError(e.to_string()),
    }
}
