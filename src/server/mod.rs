//! Server application core modules.
//!
//! This module contains the server side of the Konoha catalog: configuration, HTTP routing,
//! the generic CRUD layer built from resource descriptors, services and repositories over
//! SeaORM, and error handling.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod resource;
pub mod router;
pub mod service;
pub mod startup;
