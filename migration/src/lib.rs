pub use sea_orm_migration::prelude::*;

mod m20251019_000001_clan;
mod m20251019_000002_jutsu;
mod m20251019_000003_character;
mod m20251019_000004_character_jutsu_link;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_clan::Migration),
            Box::new(m20251019_000002_jutsu::Migration),
            Box::new(m20251019_000003_character::Migration),
            Box::new(m20251019_000004_character_jutsu_link::Migration),
        ]
    }
}
