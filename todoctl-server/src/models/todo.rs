//! To-do item shapes
//!
//! `Todo` is the persisted record; `NewTodo` is what a caller supplies
//! when creating one. The store assigns `id`.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Persisted to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Create request payload.
///
/// Decoding is lenient:
/// - keys match case-insensitively (`Title`, `DONE`)
/// - missing or `null` fields fall back to `""` / `false`
/// - a bare `null` payload is the all-default value
/// - unknown fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub done: bool,
}

impl<'de> Deserialize<'de> for NewTodo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NewTodoVisitor)
    }
}

struct NewTodoVisitor;

impl<'de> Visitor<'de> for NewTodoVisitor {
    type Value = NewTodo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a todo object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<NewTodo, E> {
        Ok(NewTodo::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<NewTodo, E> {
        Ok(NewTodo::default())
    }

    // Later duplicates win, in document order.
    fn visit_map<A>(self, mut map: A) -> Result<NewTodo, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut new = NewTodo::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("title") {
                if let Some(title) = map.next_value::<Option<String>>()? {
                    new.title = title;
                }
            } else if key.eq_ignore_ascii_case("done") {
                if let Some(done) = map.next_value::<Option<bool>>()? {
                    new.done = done;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(new)
    }
}

impl Todo {
    /// Combine a store-assigned id with the caller's fields.
    pub fn from_new(id: i64, new: NewTodo) -> Self {
        Self {
            id,
            title: new.title,
            done: new.done,
        }
    }
}
