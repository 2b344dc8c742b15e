mod cv_profile_query_postgres;
#[cfg(any(test, feature = "test-helpers"))]
mod cv_profile_repository_postgres;
pub mod sea_orm_entity;

pub use cv_profile_query_postgres::CvProfileQueryPostgres;
#[cfg(any(test, feature = "test-helpers"))]
pub use cv_profile_repository_postgres::CvProfileRepositoryPostgres;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// Shared root-existence check used by the skill and project read sides.
pub async fn profile_exists(db: &DatabaseConnection, profile_id: i32) -> Result<bool, DbErr> {
    let count = sea_orm_entity::cv_profiles::Entity::find_by_id(profile_id)
        .count(db)
        .await?;

    Ok(count > 0)
}
