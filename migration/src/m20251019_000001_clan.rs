use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clan::Table)
                    .if_not_exists()
                    .col(pk_auto(Clan::Id))
                    .col(string(Clan::Name))
                    .col(text_null(Clan::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clan {
    Table,
    Id,
    Name,
    Description,
}
