//! Database connection pool management
//!
//! Uses sqlx SqlitePool against an existing database file.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// The database file could not be opened.
#[derive(Debug, thiserror::Error)]
#[error("failed to open database at {}", path.display())]
pub struct ConnectError {
    pub path: PathBuf,
    #[source]
    pub source: sqlx::Error,
}

/// Open a pool against the SQLite file at `path`.
///
/// The file must already exist; it is never created here.
///
/// # Errors
///
/// Returns [`ConnectError`] if the file is missing or cannot be opened.
pub async fn open_pool(path: impl AsRef<Path>) -> Result<SqlitePool, ConnectError> {
    open_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a pool with a custom connection limit.
pub async fn open_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, ConnectError> {
    let path = path.as_ref();
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|source| ConnectError {
            path: path.to_path_buf(),
            source,
        })
}

/// Release every pooled connection. Call once, after the server stops.
pub async fn close_pool(pool: SqlitePool) {
    pool.close().await;
    tracing::debug!("database pool closed");
}
