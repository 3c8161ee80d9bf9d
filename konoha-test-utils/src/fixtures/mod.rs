//! Test fixture modules for database record creation.
//!
//! - `catalog` - clans, jutsus, characters and the links between characters and jutsus

pub mod catalog;
