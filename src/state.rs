use sea_orm::DatabaseConnection;

/// Handler context: the single connection pool opened at start-up.
///
/// Cloning shares the pool; nothing else is kept between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
