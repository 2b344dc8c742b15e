// src/modules/cv_profile/adapter/outgoing/cv_profile_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::cv_profile::adapter::outgoing::sea_orm_entity::{cv_educations, cv_profiles};
use crate::modules::cv_profile::application::ports::outgoing::{
    CvProfileQuery, CvProfileQueryError,
};
use crate::modules::cv_profile::domain::entities::{CvEducation, CvProfile};
use crate::shared::pagination::PageRequest;

#[derive(Clone)]
pub struct CvProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvProfileQuery for CvProfileQueryPostgres {
    async fn get_by_id(&self, profile_id: i32) -> Result<CvProfile, CvProfileQueryError> {
        let profile = cv_profiles::Entity::find_by_id(profile_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CvProfileQueryError::NotFound)?;

        Ok(profile.to_domain())
    }

    async fn list_educations(
        &self,
        profile_id: i32,
        page: PageRequest,
    ) -> Result<Vec<CvEducation>, CvProfileQueryError> {
        let educations = cv_educations::Entity::find()
            .filter(cv_educations::Column::CvProfileId.eq(profile_id))
            .order_by_asc(cv_educations::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(educations
            .into_iter()
            .map(cv_educations::Model::to_domain)
            .collect())
    }
}

fn map_db_err(e: DbErr) -> CvProfileQueryError {
    CvProfileQueryError::DatabaseError(e.to_string())
}
