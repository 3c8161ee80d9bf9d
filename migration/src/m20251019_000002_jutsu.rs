use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jutsu::Table)
                    .if_not_exists()
                    .col(pk_auto(Jutsu::Id))
                    .col(string(Jutsu::Name))
                    .col(string_null(Jutsu::Type))
                    .col(string_null(Jutsu::Rank))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jutsu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Jutsu {
    Table,
    Id,
    Name,
    Type,
    Rank,
}
