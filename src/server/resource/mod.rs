//! Resource descriptors binding each catalog record kind to its representations.
//!
//! A resource kind is described once, by implementing [`Resource`] on a marker type. The
//! implementation names the SeaORM entity backing the kind, its Create/Read/Update
//! representations, the routing metadata in [`ResourceDescriptor`], and how inputs turn
//! into new records and field patches. The generic CRUD router, lookup service and mutation
//! service are written once against this trait, so adding a resource kind never needs new
//! handler code.

pub mod character;
pub mod clan;
pub mod jutsu;

pub use character::CharacterResource;
pub use clan::ClanResource;
pub use jutsu::JutsuResource;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel,
    ModelTrait, PrimaryKeyTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::server::model::patch::FieldPatch;

/// Routing and display metadata for a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Display name of the record kind, used in error messages (e.g. `Clan`)
    pub kind: &'static str,
    /// Path the resource is mounted under (e.g. `/clans`)
    pub path_prefix: &'static str,
    /// OpenAPI tag grouping the resource's endpoints
    pub tag: &'static str,
}

impl ResourceDescriptor {
    /// Path of the collection, serving list and create
    pub fn collection_path(&self) -> String {
        self.path_prefix.to_string()
    }

    /// Path of a single record, serving get, replace, patch and delete
    pub fn item_path(&self) -> String {
        format!("{}/{{id}}", self.path_prefix)
    }

    /// Plural name used to build OpenAPI operation ids (e.g. `clans`)
    pub fn name(&self) -> &'static str {
        self.path_prefix.trim_start_matches('/')
    }
}

/// A catalog record kind served by the generic CRUD router.
///
/// Records are keyed by an auto-incremented `i32` primary key.
pub trait Resource: Send + Sync + 'static {
    /// SeaORM entity storing the records
    type Entity: EntityTrait<Model = Self::Model, PrimaryKey: PrimaryKeyTrait<ValueType = i32>>;
    /// Stored record
    type Model: ModelTrait<Entity = Self::Entity>
        + IntoActiveModel<Self::ActiveModel>
        + FromQueryResult
        + Send
        + Sync
        + 'static;
    /// Mutable form of the stored record used for inserts and updates
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Body accepted by create and replace
    type Create: DeserializeOwned + ToSchema + Send + 'static;
    /// Body returned for a record
    type Read: Serialize + ToSchema + From<Self::Model> + Send + 'static;
    /// Body accepted by partial update, every field optional
    type Update: DeserializeOwned + ToSchema + Send + 'static;

    /// Routing and display metadata
    const DESCRIPTOR: ResourceDescriptor;

    /// Builds a record to insert from a create body. The id is left for the store to assign.
    fn new_record(input: Self::Create) -> Self::ActiveModel;

    /// Builds a patch overwriting every updatable field with the values in `input`.
    fn replace_patch(input: Self::Create) -> FieldPatch<Self::Entity>;

    /// Builds a patch containing only the fields present in `input`.
    fn partial_patch(input: Self::Update) -> FieldPatch<Self::Entity>;
}
