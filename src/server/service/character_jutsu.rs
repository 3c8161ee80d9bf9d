use sea_orm::ConnectionTrait;

use crate::{
    model::{
        character_jutsu::{CharacterJutsuDto, LearnedJutsuDto},
        jutsu::JutsuRead,
    },
    server::{
        data::character_jutsu::CharacterJutsuRepository,
        error::{resource::ResourceError, Error},
        resource::{CharacterResource, JutsuResource},
        service::lookup::LookupService,
    },
};

/// Manages which jutsus a character has learned.
pub struct CharacterJutsuService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterJutsuService<'a, C> {
    /// Creates a new instance of [`CharacterJutsuService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the jutsus a character learned along with the episode each was learned in.
    ///
    /// # Returns
    /// - `Ok(Vec<LearnedJutsuDto>)` - Learned jutsus ordered by jutsu id, possibly empty
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_learned_jutsus(
        &self,
        character_id: i32,
    ) -> Result<Vec<LearnedJutsuDto>, Error> {
        LookupService::new(self.db)
            .find::<CharacterResource>(character_id)
            .await?;

        let learned = CharacterJutsuRepository::new(self.db)
            .get_learned_by_character(character_id)
            .await?;

        // Links cascade with their jutsu so the related record is always present
        Ok(learned
            .into_iter()
            .filter_map(|(link, jutsu)| {
                jutsu.map(|jutsu| LearnedJutsuDto {
                    jutsu: JutsuRead::from(jutsu),
                    learned_in_episode: link.learned_in_episode,
                })
            })
            .collect())
    }

    /// Records that a character learned a jutsu, replacing the episode if already recorded.
    ///
    /// # Returns
    /// - `Ok(CharacterJutsuDto)` - The stored link
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Character or jutsu does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn learn(
        &self,
        character_id: i32,
        jutsu_id: i32,
        learned_in_episode: Option<i32>,
    ) -> Result<CharacterJutsuDto, Error> {
        let lookup_service = LookupService::new(self.db);
        lookup_service.find::<CharacterResource>(character_id).await?;
        lookup_service.find::<JutsuResource>(jutsu_id).await?;

        let link = CharacterJutsuRepository::new(self.db)
            .upsert(character_id, jutsu_id, learned_in_episode)
            .await
            .map_err(|err| ResourceError::from_write("Character jutsu", err))?;

        Ok(CharacterJutsuDto {
            character_id: link.character_id,
            jutsu_id: link.jutsu_id,
            learned_in_episode: link.learned_in_episode,
        })
    }

    /// Removes the record of a character having learned a jutsu.
    ///
    /// # Returns
    /// - `Ok(())` - Link deleted
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - Character or jutsu does not exist
    /// - `Err(Error::ResourceError(ResourceError::LinkNotFound))` - Character never learned the jutsu
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn forget(&self, character_id: i32, jutsu_id: i32) -> Result<(), Error> {
        let lookup_service = LookupService::new(self.db);
        lookup_service.find::<CharacterResource>(character_id).await?;
        lookup_service.find::<JutsuResource>(jutsu_id).await?;

        let character_jutsu_repository = CharacterJutsuRepository::new(self.db);

        if character_jutsu_repository
            .get(character_id, jutsu_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::LinkNotFound {
                character_id,
                jutsu_id,
            }
            .into());
        }

        character_jutsu_repository
            .delete(character_id, jutsu_id)
            .await?;

        Ok(())
    }
}
