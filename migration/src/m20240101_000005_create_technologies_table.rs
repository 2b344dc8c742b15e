use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Technologies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Technologies::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Technologies::Url).text().not_null())
                    .col(
                        ColumnDef::new(Technologies::OrderField)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Technologies {
    Table,
    Id,
    Name,
    Url,
    OrderField,
}
