//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model aliases, and the field patch
//! applied by the mutation service.

pub mod app;
pub mod db;
pub mod patch;
