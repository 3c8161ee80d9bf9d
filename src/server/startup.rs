use dioxus_logger::tracing::{self, Level};
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Initialize logging at the level named by `LOG_LEVEL`, defaulting to `info`
pub fn init_logging() {
    let level = match std::env::var("LOG_LEVEL") {
        Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
            eprintln!("Unknown LOG_LEVEL {:?}, using info", value);
            Level::INFO
        }),
        Err(_) => Level::INFO,
    };

    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}
