use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields accepted when creating or replacing a jutsu
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct JutsuCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub rank: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JutsuRead {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub rank: Option<String>,
}

/// Partial update of a jutsu, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct JutsuUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub r#type: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::model::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub rank: Option<Option<String>>,
}
