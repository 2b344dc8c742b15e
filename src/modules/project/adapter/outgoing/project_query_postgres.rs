// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use sea_orm::sea_query::JoinType;
use std::sync::Arc;

use crate::modules::cv_profile::adapter::outgoing::profile_exists;
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_skills, project_technologies, projects, technologies,
};
use crate::modules::project::application::ports::outgoing::{
    LinkedTechnology, ProjectQuery, ProjectQueryError, ProjectRow, TechnologyItem,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::shared::pagination::PageRequest;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Technology columns plus the owning project id, for the batched join.
#[derive(Debug, FromQueryResult)]
struct LinkedTechnologyRow {
    project_id: i32,
    id: i32,
    name: String,
    url: String,
    order_field: i32,
}

impl From<LinkedTechnologyRow> for LinkedTechnology {
    fn from(row: LinkedTechnologyRow) -> Self {
        LinkedTechnology {
            project_id: row.project_id,
            technology: TechnologyItem {
                id: row.id,
                name: row.name,
                url: row.url,
                order_field: row.order_field,
            },
        }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn profile_exists(&self, profile_id: i32) -> Result<bool, ProjectQueryError> {
        profile_exists(&self.db, profile_id)
            .await
            .map_err(map_db_err)
    }

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectRow, ProjectQueryError> {
        projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(projects::Model::to_row)
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list_by_profile(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError> {
        let rows = projects::Entity::find()
            .filter(projects::Column::CvProfileId.eq(profile_id))
            .order_by_asc(projects::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(projects::Model::to_row).collect())
    }

    async fn list_project_ids_for_skill(
        &self,
        profile_id: i32,
        skill_name: &str,
    ) -> Result<Vec<i32>, ProjectQueryError> {
        project_skills::Entity::find()
            .select_only()
            .column(project_skills::Column::ProjectId)
            .join(JoinType::InnerJoin, project_skills::Relation::Skills.def())
            .filter(skills::Column::CvProfileId.eq(profile_id))
            .filter(skills::Column::Name.eq(skill_name))
            .distinct()
            .order_by_asc(project_skills::Column::ProjectId)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_by_ids(
        &self,
        profile_id: i32,
        project_ids: &[i32],
        page: PageRequest,
    ) -> Result<Vec<ProjectRow>, ProjectQueryError> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = projects::Entity::find()
            .filter(projects::Column::CvProfileId.eq(profile_id))
            .filter(projects::Column::Id.is_in(project_ids.iter().copied()))
            .order_by_asc(projects::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(projects::Model::to_row).collect())
    }

    async fn list_technologies_for_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<TechnologyItem>, ProjectQueryError> {
        let rows = technologies::Entity::find()
            .join(
                JoinType::InnerJoin,
                technologies::Relation::ProjectTechnologies.def(),
            )
            .filter(project_technologies::Column::ProjectId.eq(project_id))
            .order_by_asc(technologies::Column::OrderField)
            .order_by_asc(technologies::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(technologies::Model::to_item).collect())
    }

    async fn list_technologies_for_projects(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<LinkedTechnology>, ProjectQueryError> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = technologies::Entity::find()
            .select_only()
            .column(project_technologies::Column::ProjectId)
            .columns([
                technologies::Column::Id,
                technologies::Column::Name,
                technologies::Column::Url,
                technologies::Column::OrderField,
            ])
            .join(
                JoinType::InnerJoin,
                technologies::Relation::ProjectTechnologies.def(),
            )
            .filter(project_technologies::Column::ProjectId.is_in(project_ids.iter().copied()))
            .order_by_asc(project_technologies::Column::ProjectId)
            .order_by_asc(technologies::Column::OrderField)
            .order_by_asc(technologies::Column::Id)
            .into_model::<LinkedTechnologyRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(LinkedTechnology::from).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
