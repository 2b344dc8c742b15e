// src/modules/skill/adapter/outgoing/skill_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::cv_profile::adapter::outgoing::profile_exists;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::pagination::PageRequest;

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn profile_exists(&self, profile_id: i32) -> Result<bool, SkillQueryError> {
        profile_exists(&self.db, profile_id)
            .await
            .map_err(map_db_err)
    }

    async fn get_by_id(&self, skill_id: i32) -> Result<Skill, SkillQueryError> {
        skills::Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(skills::Model::to_domain)
            .ok_or(SkillQueryError::NotFound)
    }

    async fn list_by_profile(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Skill>, SkillQueryError> {
        let rows = skills::Entity::find()
            .filter(skills::Column::CvProfileId.eq(profile_id))
            .order_by_asc(skills::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(skills::Model::to_domain).collect())
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
