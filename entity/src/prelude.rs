pub use super::character::Entity as Character;
pub use super::character_jutsu_link::Entity as CharacterJutsuLink;
pub use super::clan::Entity as Clan;
pub use super::jutsu::Entity as Jutsu;
