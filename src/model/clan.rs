use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields accepted when creating or replacing a clan
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClanCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClanRead {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Partial update of a clan, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ClanUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}
