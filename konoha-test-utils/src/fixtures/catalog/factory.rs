//! Factory functions for in-memory catalog models.
//!
//! These build model instances without touching a database, for unit tests of pure
//! conversions.

use chrono::Utc;

use crate::model::{CharacterModel, ClanModel, JutsuModel};

/// Create a clan model with the given id and name.
pub fn clan_model(id: i32, name: &str) -> ClanModel {
    ClanModel {
        id,
        name: name.to_string(),
        description: None,
    }
}

/// Create a jutsu model with the given id and name.
pub fn jutsu_model(id: i32, name: &str) -> JutsuModel {
    JutsuModel {
        id,
        name: name.to_string(),
        r#type: None,
        rank: None,
    }
}

/// Create a fully populated character model.
///
/// Every optional field is filled so conversions can be checked field by field.
pub fn character_model(id: i32, name: &str, clan_id: Option<i32>) -> CharacterModel {
    CharacterModel {
        id,
        external_id: Some(format!("ext-{}", id)),
        name: name.to_string(),
        full_name: Some(format!("{} of the leaf", name)),
        rank: Some("genin".to_string()),
        clan_id,
        biography: Some("Test biography".to_string()),
        image_url: Some("https://example.com/image.png".to_string()),
        created_at: Utc::now().naive_utc(),
    }
}
