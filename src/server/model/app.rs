use sea_orm::DatabaseConnection;

/// State shared by every request handler
///
/// The connection is a pool built once at startup; cloning it is cheap and each handler
/// borrows a connection for the duration of one request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
