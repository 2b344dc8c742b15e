use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_skills, project_technologies, projects, technologies,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, CreateTechnologyData, ProjectRepository, ProjectRepositoryError,
    ProjectRow, TechnologyItem,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRow, ProjectRepositoryError> {
        let model = projects::ActiveModel {
            title: Set(data.title.trim().to_string()),
            short_description: Set(data.short_description),
            description: Set(data.description),
            image: Set(data.image),
            hex_theme_color: Set(data.hex_theme_color),
            project_url: Set(data.project_url),
            significance: Set(data.significance),
            cv_profile_id: Set(data.cv_profile_id),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_project_err)?;

        Ok(inserted.to_row())
    }

    async fn create_technology(
        &self,
        data: CreateTechnologyData,
    ) -> Result<TechnologyItem, ProjectRepositoryError> {
        let model = technologies::ActiveModel {
            name: Set(data.name.trim().to_string()),
            url: Set(data.url),
            order_field: Set(data.order_field),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_item())
    }

    async fn create_project_technology(
        &self,
        project_id: i32,
        technology_id: i32,
    ) -> Result<(), ProjectRepositoryError> {
        project_technologies::ActiveModel {
            project_id: Set(project_id),
            technology_id: Set(technology_id),
        }
        .insert(&*self.db)
        .await
        .map_err(map_link_err)?;

        Ok(())
    }

    async fn create_project_skill(
        &self,
        project_id: i32,
        skill_id: i32,
    ) -> Result<(), ProjectRepositoryError> {
        project_skills::ActiveModel {
            project_id: Set(project_id),
            skill_id: Set(skill_id),
        }
        .insert(&*self.db)
        .await
        .map_err(map_link_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_project_err(e: DbErr) -> ProjectRepositoryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ProjectRepositoryError::ProfileNotFound,
        _ => map_db_err(e),
    }
}

/// Junction inserts. Falls back to the Postgres error text when the driver
/// error is not classified (23505 unique, 23503 foreign key).
fn map_link_err(e: DbErr) -> ProjectRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ProjectRepositoryError::DuplicateLink,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ProjectRepositoryError::MissingReference,
        _ => {
            let msg = e.to_string().to_lowercase();

            if msg.contains("duplicate key") || msg.contains("23505") {
                ProjectRepositoryError::DuplicateLink
            } else if msg.contains("foreign key") || msg.contains("23503") {
                ProjectRepositoryError::MissingReference
            } else {
                ProjectRepositoryError::DatabaseError(e.to_string())
            }
        }
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
