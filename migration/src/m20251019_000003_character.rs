use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_clan::Clan;

static IDX_CHARACTER_CLAN_ID: &str = "idx-character-clan_id";
static FK_CHARACTER_CLAN_ID: &str = "fk-character-clan_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_null(Character::ExternalId))
                    .col(string(Character::Name))
                    .col(string_null(Character::FullName))
                    .col(string_null(Character::Rank))
                    .col(integer_null(Character::ClanId))
                    .col(text_null(Character::Biography))
                    .col(string_null(Character::ImageUrl))
                    .col(timestamp(Character::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_CLAN_ID)
                    .table(Character::Table)
                    .col(Character::ClanId)
                    .to_owned(),
            )
            .await?;

        // Members outlive their clan, they just lose the affiliation
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_CLAN_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::ClanId)
                    .to_tbl(Clan::Table)
                    .to_col(Clan::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_CLAN_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_CLAN_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    ExternalId,
    Name,
    FullName,
    Rank,
    ClanId,
    Biography,
    ImageUrl,
    CreatedAt,
}
