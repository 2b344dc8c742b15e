mod project_query_postgres;
#[cfg(any(test, feature = "test-helpers"))]
mod project_repository_postgres;
pub mod sea_orm_entity;

pub use project_query_postgres::ProjectQueryPostgres;
#[cfg(any(test, feature = "test-helpers"))]
pub use project_repository_postgres::ProjectRepositoryPostgres;
