use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CvProfiles::Name).string_len(255).not_null())
                    .col(ColumnDef::new(CvProfiles::Email).string_len(255).not_null())
                    .col(ColumnDef::new(CvProfiles::Phone).string_len(50).not_null())
                    .col(ColumnDef::new(CvProfiles::Address).string_len(255).not_null())
                    .col(ColumnDef::new(CvProfiles::LinkedinUrl).text())
                    .col(ColumnDef::new(CvProfiles::GithubUrl).text().not_null())
                    .col(ColumnDef::new(CvProfiles::Bio).text().not_null())
                    .col(ColumnDef::new(CvProfiles::ProfilePicture).text().not_null())
                    .col(
                        ColumnDef::new(CvProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CvProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CvProfiles {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    LinkedinUrl,
    GithubUrl,
    Bio,
    ProfilePicture,
    CreatedAt,
}
