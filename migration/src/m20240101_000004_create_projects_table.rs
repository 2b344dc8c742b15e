use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_cv_profiles_table::CvProfiles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::ShortDescription).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Image).text().not_null())
                    .col(ColumnDef::new(Projects::HexThemeColor).string_len(7).not_null())
                    .col(ColumnDef::new(Projects::ProjectUrl).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Significance)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Projects::CvProfileId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_cv_profile_id")
                            .from(Projects::Table, Projects::CvProfileId)
                            .to(CvProfiles::Table, CvProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup by profile
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_cv_profile_id
                ON projects (cv_profile_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Title,
    ShortDescription,
    Description,
    Image,
    HexThemeColor,
    ProjectUrl,
    Significance,
    CvProfileId,
}
