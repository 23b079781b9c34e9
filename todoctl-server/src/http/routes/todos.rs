//! Todo endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::TodoRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewTodo, Todo};

/// GET /todos - list every todo
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list_all().await?;
    Ok(Json(todos))
}

/// POST /todos - create a todo
///
/// Responds 200 (not 201) with the created record.
async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).create(new).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok(Json(todo))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/todos", get(list_todos).post(create_todo))
}
