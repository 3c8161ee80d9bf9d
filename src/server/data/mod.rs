//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries behind small typed methods. [`entity::EntityRepository`]
//! serves every catalog resource generically; [`character_jutsu::CharacterJutsuRepository`]
//! handles the links between characters and the jutsus they learned.

pub mod character_jutsu;
pub mod entity;
