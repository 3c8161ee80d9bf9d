use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::jutsu::JutsuRead;

/// Request body for recording that a character learned a jutsu
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LearnJutsuDto {
    /// Episode in which the jutsu was learned, if known
    #[serde(default)]
    pub learned_in_episode: Option<i32>,
}

/// Link between a character and a jutsu they learned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterJutsuDto {
    pub character_id: i32,
    pub jutsu_id: i32,
    pub learned_in_episode: Option<i32>,
}

/// A jutsu as learned by a specific character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LearnedJutsuDto {
    pub jutsu: JutsuRead,
    pub learned_in_episode: Option<i32>,
}
