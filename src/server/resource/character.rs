use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::character::{CharacterCreate, CharacterRead, CharacterUpdate},
    server::{
        model::{db::CharacterModel, patch::FieldPatch},
        resource::{Resource, ResourceDescriptor},
    },
};

use entity::character::{ActiveModel, Column, Entity};

/// OpenAPI tag of the character endpoints
pub const CHARACTER_TAG: &str = "Characters";

/// Descriptor of the `character` table served under `/characters`
pub struct CharacterResource;

impl Resource for CharacterResource {
    type Entity = Entity;
    type Model = CharacterModel;
    type ActiveModel = ActiveModel;

    type Create = CharacterCreate;
    type Read = CharacterRead;
    type Update = CharacterUpdate;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: "Character",
        path_prefix: "/characters",
        tag: CHARACTER_TAG,
    };

    fn new_record(input: CharacterCreate) -> ActiveModel {
        ActiveModel {
            external_id: ActiveValue::Set(input.external_id),
            name: ActiveValue::Set(input.name),
            full_name: ActiveValue::Set(input.full_name),
            rank: ActiveValue::Set(input.rank),
            clan_id: ActiveValue::Set(input.clan_id),
            biography: ActiveValue::Set(input.biography),
            image_url: ActiveValue::Set(input.image_url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }

    // created_at is owned by the store and never part of a patch
    fn replace_patch(input: CharacterCreate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set(Column::ExternalId, input.external_id)
            .set(Column::Name, input.name)
            .set(Column::FullName, input.full_name)
            .set(Column::Rank, input.rank)
            .set(Column::ClanId, input.clan_id)
            .set(Column::Biography, input.biography)
            .set(Column::ImageUrl, input.image_url)
    }

    fn partial_patch(input: CharacterUpdate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set_if_present(Column::ExternalId, input.external_id)
            .set_if_present(Column::Name, input.name)
            .set_if_present(Column::FullName, input.full_name)
            .set_if_present(Column::Rank, input.rank)
            .set_if_present(Column::ClanId, input.clan_id)
            .set_if_present(Column::Biography, input.biography)
            .set_if_present(Column::ImageUrl, input.image_url)
    }
}

impl From<CharacterModel> for CharacterRead {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            full_name: character.full_name,
            external_id: character.external_id,
            rank: character.rank,
            clan_id: character.clan_id,
            biography: character.biography,
            image_url: character.image_url,
            created_at: character.created_at,
        }
    }
}
