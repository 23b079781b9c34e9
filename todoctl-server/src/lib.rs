//! todoctl-server: HTTP server for a persistent to-do list
//!
//! Exposes two routes over a SQLite-backed `todos` table:
//! - `GET /todos` lists every item
//! - `POST /todos` creates one item

pub mod db;
pub mod http;
pub mod models;

pub use db::{close_pool, open_pool, ConnectError, DbError, TodoRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{NewTodo, Todo};
