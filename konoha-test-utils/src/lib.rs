//! Shared test tooling for the Konoha workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and catalog
//! fixtures a test needs, and `build()` returns a [`TestContext`] backed by an in-memory
//! SQLite database with those tables created and fixtures inserted.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::catalog::factory, test_setup_with_catalog_tables, test_setup_with_tables,
        TestBuilder, TestContext, TestError,
    };
}
