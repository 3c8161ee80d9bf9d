use sea_orm::ActiveValue;

use crate::{
    model::clan::{ClanCreate, ClanRead, ClanUpdate},
    server::{
        model::{db::ClanModel, patch::FieldPatch},
        resource::{Resource, ResourceDescriptor},
    },
};

use entity::clan::{ActiveModel, Column, Entity};

/// OpenAPI tag of the clan endpoints
pub const CLAN_TAG: &str = "Clans";

/// Descriptor of the `clan` table served under `/clans`
pub struct ClanResource;

impl Resource for ClanResource {
    type Entity = Entity;
    type Model = ClanModel;
    type ActiveModel = ActiveModel;

    type Create = ClanCreate;
    type Read = ClanRead;
    type Update = ClanUpdate;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: "Clan",
        path_prefix: "/clans",
        tag: CLAN_TAG,
    };

    fn new_record(input: ClanCreate) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(input.name),
            description: ActiveValue::Set(input.description),
            ..Default::default()
        }
    }

    fn replace_patch(input: ClanCreate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set(Column::Name, input.name)
            .set(Column::Description, input.description)
    }

    fn partial_patch(input: ClanUpdate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set_if_present(Column::Name, input.name)
            .set_if_present(Column::Description, input.description)
    }
}

impl From<ClanModel> for ClanRead {
    fn from(clan: ClanModel) -> Self {
        Self {
            id: clan.id,
            name: clan.name,
            description: clan.description,
        }
    }
}
