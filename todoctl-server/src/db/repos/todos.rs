//! Todo repository
//!
//! - list_all: one SELECT, rows mapped by position
//! - create: parameterized INSERT, id read from the same statement result

use sqlx::error::UnexpectedNullError;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewTodo, Todo};

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Read every todo, ordered by id.
    ///
    /// A row that fails to decode fails the whole call; partial
    /// results are never returned.
    pub async fn list_all(&self) -> Result<Vec<Todo>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, done
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DbError::Query)?;

        rows.iter()
            .map(todo_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbError::Query)
    }

    /// Insert a todo and return it with its store-assigned id.
    ///
    /// `title` is stored as given, empty strings included.
    pub async fn create(&self, new: NewTodo) -> Result<Todo, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, done)
            VALUES (?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(new.done)
        .execute(self.pool)
        .await
        .map_err(DbError::Insert)?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "todo inserted");

        Ok(Todo::from_new(id, new))
    }
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: non_null(row, 0)?,
        title: non_null(row, 1)?,
        done: non_null(row, 2)?,
    })
}

// The SQLite driver decodes NULL as the type's default for TEXT and
// INTEGER targets, so read through Option and reject NULL explicitly.
fn non_null<'r, T>(row: &'r SqliteRow, index: usize) -> Result<T, sqlx::Error>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(index)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: index.to_string(),
            source: Box::new(UnexpectedNullError),
        })
}
