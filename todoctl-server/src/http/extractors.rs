//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body, decoded regardless of `Content-Type`.
///
/// Bytes after the first complete JSON value are not inspected.
///
/// Unlike `axum::Json`, failures map to [`ApiError`] so every bad body
/// gets the same plain-text 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::Body)?;

        // Only the first JSON value is read; anything after it is ignored.
        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value: T =
            serde::Deserialize::deserialize(&mut deserializer).map_err(ApiError::Decode)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTodo;
    use axum::body::Body;

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/todos")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let body = request(r#"{"title":"a","done":true}"#);
        let JsonBody(new) = JsonBody::<NewTodo>::from_request(body, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(new.title, "a");
        assert!(new.done);
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let err = JsonBody::<NewTodo>::from_request(request("not json"), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn trailing_data_after_value_is_ignored() {
        let body = request(r#"{"title":"a","done":true} trailing"#);
        let JsonBody(new) = JsonBody::<NewTodo>::from_request(body, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(new.title, "a");
        assert!(new.done);
    }

    #[tokio::test]
    async fn empty_body_is_decode_error() {
        let err = JsonBody::<NewTodo>::from_request(request(""), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
