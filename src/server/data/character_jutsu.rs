use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{CharacterJutsuLinkModel, JutsuModel};

/// Links between characters and the jutsus they learned
pub struct CharacterJutsuRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterJutsuRepository<'a, C> {
    /// Creates a new instance of [`CharacterJutsuRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the link between a character and a jutsu, if the character learned it
    pub async fn get(
        &self,
        character_id: i32,
        jutsu_id: i32,
    ) -> Result<Option<CharacterJutsuLinkModel>, DbErr> {
        entity::prelude::CharacterJutsuLink::find_by_id((character_id, jutsu_id))
            .one(self.db)
            .await
    }

    /// Gets the jutsus learned by a character, ordered by jutsu id
    pub async fn get_learned_by_character(
        &self,
        character_id: i32,
    ) -> Result<Vec<(CharacterJutsuLinkModel, Option<JutsuModel>)>, DbErr> {
        entity::prelude::CharacterJutsuLink::find()
            .filter(entity::character_jutsu_link::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::character_jutsu_link::Column::JutsuId)
            .find_also_related(entity::jutsu::Entity)
            .all(self.db)
            .await
    }

    /// Creates the link or, if the character already learned the jutsu, updates the episode
    pub async fn upsert(
        &self,
        character_id: i32,
        jutsu_id: i32,
        learned_in_episode: Option<i32>,
    ) -> Result<CharacterJutsuLinkModel, DbErr> {
        entity::prelude::CharacterJutsuLink::insert(entity::character_jutsu_link::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            jutsu_id: ActiveValue::Set(jutsu_id),
            learned_in_episode: ActiveValue::Set(learned_in_episode),
        })
        .on_conflict(
            OnConflict::columns([
                entity::character_jutsu_link::Column::CharacterId,
                entity::character_jutsu_link::Column::JutsuId,
            ])
            .update_column(entity::character_jutsu_link::Column::LearnedInEpisode)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Deletes a link
    ///
    /// Returns OK regardless of the link existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32, jutsu_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CharacterJutsuLink::delete_by_id((character_id, jutsu_id))
            .exec(self.db)
            .await
    }
}
