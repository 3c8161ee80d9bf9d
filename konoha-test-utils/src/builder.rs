//! Declarative test builder.
//!
//! The builder queues table creation and catalog fixtures; everything runs in the final
//! `build()` call, parents before children.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use konoha_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), konoha_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_catalog_tables()
///     .with_clan("Uchiha")
///     .with_character("sasuke", Some(1))
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    clans: Vec<String>,
    jutsus: Vec<String>,
    characters: Vec<(String, Option<i32>)>, // (name, clan_id)
    links: Vec<(i32, i32, Option<i32>)>,    // (character_id, jutsu_id, learned_in_episode)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            clans: Vec::new(),
            jutsus: Vec::new(),
            characters: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add the clan, jutsu, character and character/jutsu link tables.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a clan. Clans get ids 1, 2, ... in the order they are added.
    pub fn with_clan(mut self, name: impl Into<String>) -> Self {
        self.clans.push(name.into());
        self
    }

    /// Insert a jutsu. Jutsus get ids 1, 2, ... in the order they are added.
    pub fn with_jutsu(mut self, name: impl Into<String>) -> Self {
        self.jutsus.push(name.into());
        self
    }

    /// Insert a character, optionally in a clan added with [`Self::with_clan`].
    pub fn with_character(mut self, name: impl Into<String>, clan_id: Option<i32>) -> Self {
        self.characters.push((name.into(), clan_id));
        self
    }

    /// Link a character to a jutsu it learned.
    pub fn with_character_jutsu_link(
        mut self,
        character_id: i32,
        jutsu_id: i32,
        learned_in_episode: Option<i32>,
    ) -> Self {
        self.links
            .push((character_id, jutsu_id, learned_in_episode));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Clan),
                schema.create_table_from_entity(entity::prelude::Jutsu),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::CharacterJutsuLink),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for name in self.clans {
            setup.catalog().insert_clan(&name).await?;
        }

        for name in self.jutsus {
            setup.catalog().insert_jutsu(&name).await?;
        }

        for (name, clan_id) in self.characters {
            setup.catalog().insert_character(&name, clan_id).await?;
        }

        for (character_id, jutsu_id, learned_in_episode) in self.links {
            setup
                .catalog()
                .insert_character_jutsu_link(character_id, jutsu_id, learned_in_episode)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
