//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context wraps an
//! in-memory SQLite database; catalog fixtures are reached through [`TestContext::catalog`].

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most tests should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// let clan = test.catalog().insert_clan("Uchiha").await?;
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without a circular dependency between the
    /// test-utils crate and the main konoha crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements, executed in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
