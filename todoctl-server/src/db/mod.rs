//! Database layer - connection pool, schema, and repositories
//!
//! The pool is opened once by the caller and passed in by reference.
//! Concurrent access is serialized by SQLite itself; nothing here locks.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{close_pool, open_pool, open_pool_with_options, ConnectError};
pub use repos::{DbError, TodoRepo};
pub use schema::{create_database, ensure_schema, InitError};
