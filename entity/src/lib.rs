pub mod prelude;

pub mod character;
pub mod character_jutsu_link;
pub mod clan;
pub mod jutsu;
