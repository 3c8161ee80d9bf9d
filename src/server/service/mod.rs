//! Service layer for business logic.
//!
//! Services sit between the HTTP handlers and the repositories. [`lookup::LookupService`]
//! turns missing records into not-found errors, [`mutation::MutationService`] applies field
//! patches to existing records, and [`character_jutsu::CharacterJutsuService`] manages the
//! jutsus each character has learned.

pub mod character_jutsu;
pub mod lookup;
pub mod mutation;
