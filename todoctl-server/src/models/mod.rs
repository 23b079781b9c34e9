//! Domain models shared by the repository and the HTTP layer

pub mod todo;

pub use todo::{NewTodo, Todo};
