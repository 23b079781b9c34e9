//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Plain-text error responses
//! - Store pool injected through router state

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
