//! `todos` table definition
//!
//! The server never runs this on startup. It backs the `init-db`
//! operator command and the test fixtures.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::pool::ConnectError;
use super::repos::DbError;

// AUTOINCREMENT keeps ids from being reused after the highest row is removed.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    done BOOLEAN NOT NULL
)
"#;

/// Create the `todos` table if it does not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map_err(DbError::Schema)?;

    tracing::info!("todos table ready");
    Ok(())
}

/// Create the database file at `path` (if needed) and its schema.
///
/// Returns a single-connection pool the caller should close.
pub async fn create_database(path: impl AsRef<Path>) -> Result<SqlitePool, InitError> {
    let path = path.as_ref();
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|source| ConnectError {
            path: path.to_path_buf(),
            source,
        })?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Failure while initializing a fresh database.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error(transparent)]
    Db(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_database_makes_file_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.db");

        let pool = create_database(&path).await.unwrap();
        assert!(path.exists());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        pool.close().await;
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_database(dir.path().join("todos.db")).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool.close().await;
    }
}
