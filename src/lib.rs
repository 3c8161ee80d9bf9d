//! Konoha: a catalog API for shinobi characters, their clans and the jutsus they learned.

pub mod model;
pub mod server;
