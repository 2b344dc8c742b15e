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
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Description).text().not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::Importance)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Skills::Image).text().not_null())
                    .col(ColumnDef::new(Skills::HexThemeColor).string_len(7).not_null())
                    .col(ColumnDef::new(Skills::CvProfileId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_cv_profile_id")
                            .from(Skills::Table, Skills::CvProfileId)
                            .to(CvProfiles::Table, CvProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Skill filter resolves (cv_profile_id, name)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_cv_profile_id_name
                ON skills (cv_profile_id, name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Skills {
    Table,
    Id,
    Name,
    Description,
    Category,
    Importance,
    Image,
    HexThemeColor,
    CvProfileId,
}
