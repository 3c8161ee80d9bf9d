/// Create a [`TestContext`](crate::TestContext) with tables for the given entities.
///
/// With no arguments the context has no tables, which is useful for asserting that
/// operations fail cleanly when the schema is missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}

/// Create a [`TestContext`](crate::TestContext) with every catalog table.
///
/// Tables are created parent-first so foreign keys resolve.
#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Clan),
                schema.create_table_from_entity(entity::prelude::Jutsu),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::CharacterJutsuLink),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}
