use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000002_jutsu::Jutsu, m20251019_000003_character::Character};

static IDX_CHARACTER_JUTSU_LINK_JUTSU_ID: &str = "idx-character_jutsu_link-jutsu_id";
static FK_CHARACTER_JUTSU_LINK_CHARACTER_ID: &str = "fk-character_jutsu_link-character_id";
static FK_CHARACTER_JUTSU_LINK_JUTSU_ID: &str = "fk-character_jutsu_link-jutsu_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterJutsuLink::Table)
                    .if_not_exists()
                    .col(integer(CharacterJutsuLink::CharacterId))
                    .col(integer(CharacterJutsuLink::JutsuId))
                    .col(integer_null(CharacterJutsuLink::LearnedInEpisode))
                    .primary_key(
                        Index::create()
                            .col(CharacterJutsuLink::CharacterId)
                            .col(CharacterJutsuLink::JutsuId),
                    )
                    .to_owned(),
            )
            .await?;

        // The composite primary key already covers lookups by character_id
        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_JUTSU_LINK_JUTSU_ID)
                    .table(CharacterJutsuLink::Table)
                    .col(CharacterJutsuLink::JutsuId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_JUTSU_LINK_CHARACTER_ID)
                    .from_tbl(CharacterJutsuLink::Table)
                    .from_col(CharacterJutsuLink::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_JUTSU_LINK_JUTSU_ID)
                    .from_tbl(CharacterJutsuLink::Table)
                    .from_col(CharacterJutsuLink::JutsuId)
                    .to_tbl(Jutsu::Table)
                    .to_col(Jutsu::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_JUTSU_LINK_JUTSU_ID)
                    .table(CharacterJutsuLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_JUTSU_LINK_CHARACTER_ID)
                    .table(CharacterJutsuLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_JUTSU_LINK_JUTSU_ID)
                    .table(CharacterJutsuLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CharacterJutsuLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CharacterJutsuLink {
    Table,
    CharacterId,
    JutsuId,
    LearnedInEpisode,
}
