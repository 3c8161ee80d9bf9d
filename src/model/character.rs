use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields accepted when creating or replacing a character
///
/// A replace restates the whole character, so optional fields left out of a replace
/// are cleared.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CharacterCreate {
    pub name: String,
    pub full_name: Option<String>,
    pub external_id: Option<String>,
    pub rank: Option<String>,
    /// ID of the clan the character belongs to
    pub clan_id: Option<i32>,
    pub biography: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterRead {
    pub id: i32,
    pub name: String,
    pub full_name: Option<String>,
    pub external_id: Option<String>,
    pub rank: Option<String>,
    pub clan_id: Option<i32>,
    pub biography: Option<String>,
    pub image_url: Option<String>,
    /// When the character was added to the catalog
    pub created_at: NaiveDateTime,
}

/// Partial update of a character, omitted fields are left unchanged
///
/// Sending `null` for an optional field clears it. `name` cannot be cleared, a `null`
/// name is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CharacterUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub full_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub external_id: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub rank: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i32>)]
    pub clan_id: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub biography: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}
