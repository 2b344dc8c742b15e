pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cv_profiles_table;
mod m20240101_000002_create_cv_educations_table;
mod m20240101_000003_create_skills_table;
mod m20240101_000004_create_projects_table;
mod m20240101_000005_create_technologies_table;
mod m20240101_000006_create_project_junction_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cv_profiles_table::Migration),
            Box::new(m20240101_000002_create_cv_educations_table::Migration),
            Box::new(m20240101_000003_create_skills_table::Migration),
            Box::new(m20240101_000004_create_projects_table::Migration),
            Box::new(m20240101_000005_create_technologies_table::Migration),
            Box::new(m20240101_000006_create_project_junction_tables::Migration),
        ]
    }
}
