//! HTTP controller endpoints for the Konoha catalog API.
//!
//! The catalog resources share the generic handlers built by [`crud::crud_router`]. The
//! remaining modules hold the hand-written endpoints: the root greeting and the jutsus a
//! character has learned. Every endpoint is documented for utoipa's OpenAPI generation.

pub mod character_jutsu;
pub mod crud;
pub mod root;
