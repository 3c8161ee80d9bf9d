//! Request and response representations exposed over the HTTP API.
//!
//! Each resource kind has three shapes: `*Create` for creation and full replacement,
//! `*Read` for responses, and `*Update` for partial updates where every field is optional.

pub mod api;
pub mod character;
pub mod character_jutsu;
pub mod clan;
pub mod jutsu;

use serde::{Deserialize, Deserializer};

/// Deserializes a nullable field of a partial update.
///
/// Used together with `#[serde(default)]` so an absent field stays `None` while an explicit
/// `null` becomes `Some(None)`, which clears the stored value.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
