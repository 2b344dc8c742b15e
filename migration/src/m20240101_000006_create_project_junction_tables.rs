use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_skills_table::Skills;
use super::m20240101_000004_create_projects_table::Projects;
use super::m20240101_000005_create_technologies_table::Technologies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // project_technologies join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTechnologies::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::TechnologyId)
                            .integer()
                            .not_null(),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(ProjectTechnologies::ProjectId)
                            .col(ProjectTechnologies::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_technology_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::TechnologyId)
                            .to(Technologies::Table, Technologies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // project_skills join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectSkills::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectSkills::SkillId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ProjectSkills::ProjectId)
                            .col(ProjectSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skills_project_id")
                            .from(ProjectSkills::Table, ProjectSkills::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skills_skill_id")
                            .from(ProjectSkills::Table, ProjectSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all projects for a technology
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_technologies_technology_id
                ON project_technologies (technology_id);
                "#,
            )
            .await?;

        // Fast lookup: all projects for a skill
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_skills_skill_id
                ON project_skills (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_project_technologies_technology_id;
                DROP INDEX IF EXISTS idx_project_skills_skill_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectSkills::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    ProjectId,
    TechnologyId,
}

#[derive(DeriveIden)]
enum ProjectSkills {
    Table,
    ProjectId,
    SkillId,
}
