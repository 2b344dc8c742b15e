use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_cv_profiles_table::CvProfiles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvEducations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvEducations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CvEducations::Institution)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CvEducations::Degree).string_len(255).not_null())
                    .col(ColumnDef::new(CvEducations::StartDate).date().not_null())
                    .col(ColumnDef::new(CvEducations::EndDate).date().not_null())
                    .col(ColumnDef::new(CvEducations::CvProfileId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_educations_cv_profile_id")
                            .from(CvEducations::Table, CvEducations::CvProfileId)
                            .to(CvProfiles::Table, CvProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_cv_educations_cv_profile_id
                ON cv_educations (cv_profile_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CvEducations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvEducations {
    Table,
    Id,
    Institution,
    Degree,
    StartDate,
    EndDate,
    CvProfileId,
}
