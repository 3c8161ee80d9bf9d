use sea_orm::ActiveValue;

use crate::{
    model::jutsu::{JutsuCreate, JutsuRead, JutsuUpdate},
    server::{
        model::{db::JutsuModel, patch::FieldPatch},
        resource::{Resource, ResourceDescriptor},
    },
};

use entity::jutsu::{ActiveModel, Column, Entity};

/// OpenAPI tag of the jutsu endpoints
pub const JUTSU_TAG: &str = "Jutsus";

/// Descriptor of the `jutsu` table served under `/jutsus`
pub struct JutsuResource;

impl Resource for JutsuResource {
    type Entity = Entity;
    type Model = JutsuModel;
    type ActiveModel = ActiveModel;

    type Create = JutsuCreate;
    type Read = JutsuRead;
    type Update = JutsuUpdate;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: "Jutsu",
        path_prefix: "/jutsus",
        tag: JUTSU_TAG,
    };

    fn new_record(input: JutsuCreate) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(input.name),
            r#type: ActiveValue::Set(input.r#type),
            rank: ActiveValue::Set(input.rank),
            ..Default::default()
        }
    }

    fn replace_patch(input: JutsuCreate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set(Column::Name, input.name)
            .set(Column::Type, input.r#type)
            .set(Column::Rank, input.rank)
    }

    fn partial_patch(input: JutsuUpdate) -> FieldPatch<Entity> {
        FieldPatch::<Entity>::new()
            .set_if_present(Column::Name, input.name)
            .set_if_present(Column::Type, input.r#type)
            .set_if_present(Column::Rank, input.rank)
    }
}

impl From<JutsuModel> for JutsuRead {
    fn from(jutsu: JutsuModel) -> Self {
        Self {
            id: jutsu.id,
            name: jutsu.name,
            r#type: jutsu.r#type,
            rank: jutsu.rank,
        }
    }
}
