//! Repository implementations for database access

pub mod todos;

pub use todos::TodoRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to query todos")]
    Query(#[source] sqlx::Error),

    #[error("failed to insert todo")]
    Insert(#[source] sqlx::Error),

    #[error("failed to create todos table")]
    Schema(#[source] sqlx::Error),
}
