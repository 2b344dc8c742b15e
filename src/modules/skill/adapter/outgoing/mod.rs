pub mod sea_orm_entity;
mod skill_query_postgres;
#[cfg(any(test, feature = "test-helpers"))]
mod skill_repository_postgres;

pub use skill_query_postgres::SkillQueryPostgres;
#[cfg(any(test, feature = "test-helpers"))]
pub use skill_repository_postgres::SkillRepositoryPostgres;
