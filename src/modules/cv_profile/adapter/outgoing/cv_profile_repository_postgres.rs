// src/modules/cv_profile/adapter/outgoing/cv_profile_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;

use crate::modules::cv_profile::adapter::outgoing::sea_orm_entity::{cv_educations, cv_profiles};
use crate::modules::cv_profile::application::ports::outgoing::{
    CreateCvEducationData, CreateCvProfileData, CvProfileRepository, CvProfileRepositoryError,
};
use crate::modules::cv_profile::domain::entities::{CvEducation, CvProfile};

#[derive(Clone)]
pub struct CvProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvProfileRepository for CvProfileRepositoryPostgres {
    async fn create_profile(
        &self,
        data: CreateCvProfileData,
    ) -> Result<CvProfile, CvProfileRepositoryError> {
        // id and created_at come from column defaults
        let active = cv_profiles::ActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            address: Set(data.address),
            linkedin_url: Set(data.linkedin_url),
            github_url: Set(data.github_url),
            bio: Set(data.bio),
            profile_picture: Set(data.profile_picture),
            ..Default::default()
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }

    async fn create_education(
        &self,
        data: CreateCvEducationData,
    ) -> Result<CvEducation, CvProfileRepositoryError> {
        let active = cv_educations::ActiveModel {
            institution: Set(data.institution),
            degree: Set(data.degree),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            cv_profile_id: Set(data.cv_profile_id),
            ..Default::default()
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }
}

fn map_db_err(e: DbErr) -> CvProfileRepositoryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CvProfileRepositoryError::ProfileNotFound,
        _ => CvProfileRepositoryError::DatabaseError(e.to_string()),
    }
}
