//! Database model type aliases for test utilities.
//!
//! These match the aliases used by the konoha crate so fixtures and assertions read the
//! same on both sides.

/// Type alias for the clan database model.
pub type ClanModel = entity::clan::Model;

/// Type alias for the jutsu database model.
pub type JutsuModel = entity::jutsu::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the character/jutsu link database model.
pub type CharacterJutsuLinkModel = entity::character_jutsu_link::Model;
