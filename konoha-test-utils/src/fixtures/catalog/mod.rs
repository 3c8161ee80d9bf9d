//! Catalog fixture utilities.
//!
//! Inserts clan, jutsu, character and character/jutsu link records directly through
//! SeaORM, bypassing the services under test.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterJutsuLinkModel, CharacterModel, ClanModel, JutsuModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a clan with the given name and no description.
    pub async fn insert_clan(&self, name: &str) -> Result<ClanModel, TestError> {
        Ok(entity::prelude::Clan::insert(entity::clan::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a jutsu with the given name, without type or rank.
    pub async fn insert_jutsu(&self, name: &str) -> Result<JutsuModel, TestError> {
        Ok(entity::prelude::Jutsu::insert(entity::jutsu::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            r#type: ActiveValue::Set(None),
            rank: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a character with the given name, optionally belonging to a clan.
    ///
    /// All other optional fields are left empty.
    pub async fn insert_character(
        &self,
        name: &str,
        clan_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                external_id: ActiveValue::Set(None),
                full_name: ActiveValue::Set(None),
                rank: ActiveValue::Set(None),
                clan_id: ActiveValue::Set(clan_id),
                biography: ActiveValue::Set(None),
                image_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Record that a character learned a jutsu.
    pub async fn insert_character_jutsu_link(
        &self,
        character_id: i32,
        jutsu_id: i32,
        learned_in_episode: Option<i32>,
    ) -> Result<CharacterJutsuLinkModel, TestError> {
        Ok(entity::prelude::CharacterJutsuLink::insert(
            entity::character_jutsu_link::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                jutsu_id: ActiveValue::Set(jutsu_id),
                learned_in_episode: ActiveValue::Set(learned_in_episode),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a clan and a character belonging to it.
    pub async fn insert_character_with_clan(
        &self,
        character_name: &str,
        clan_name: &str,
    ) -> Result<(ClanModel, CharacterModel), TestError> {
        let clan = self.insert_clan(clan_name).await?;
        let character = self.insert_character(character_name, Some(clan.id)).await?;

        Ok((clan, character))
    }
}
