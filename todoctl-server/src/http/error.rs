//! API error types with IntoResponse
//!
//! Errors become plain-text responses carrying only the status phrase.
//! The full cause chain is logged, never sent to the client.

use std::error::Error as StdError;
use std::fmt;

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be read (400)
    #[error("failed to read request body")]
    Body(#[source] BytesRejection),

    /// Request body is not valid JSON for the target type (400)
    #[error("failed to decode request body")]
    Decode(#[source] serde_json::Error),

    /// Store failure (500)
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), error = %ErrorChain(&self), "request failed");

        let phrase = status.canonical_reason().unwrap_or("Error");
        (status, phrase).into_response()
    }
}

/// Displays an error followed by each of its sources, `: `-separated.
pub struct ErrorChain<'a>(pub &'a (dyn StdError + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    fn decode_error() -> ApiError {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        ApiError::Decode(err)
    }

    #[tokio::test]
    async fn decode_error_is_400_plain_text() {
        let response = decode_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Bad Request");
    }

    #[tokio::test]
    async fn database_error_is_500_without_detail() {
        let err = ApiError::Database(DbError::Query(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = ApiError::Database(DbError::Insert(sqlx::Error::PoolClosed));
        let rendered = ErrorChain(&err).to_string();
        assert!(rendered.starts_with("failed to insert todo: "));
        assert!(rendered.contains("closed"));
    }
}
