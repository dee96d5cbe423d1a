use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Whether `database_url` names an in-memory `SQLite` database.
///
/// Each pooled connection to such a URL opens its own empty database.
#[must_use]
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite:") && database_url.contains(":memory:")
}

/// Pool settings for `database_url`.
///
/// In-memory `SQLite` is pinned to a single connection that never idles out or expires,
/// so every handler sees the same schema and rows.
#[must_use]
pub fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut opts = ConnectOptions::new(database_url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if is_in_memory(database_url) {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(max_connections.max(1))
            .min_connections(max_connections.clamp(1, 2))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800));
    }

    opts
}

/// Open the connection pool shared by every handler.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(database_url, max_connections)).await?;
    Ok(db)
}
