//! `ApiError`: the boundary-facing error enum handlers return. Turns a
//! [`crate::error::ServiceError`] or a local validation failure into a
//! concrete status code and body, in a single `IntoResponse` implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ServiceError;

/// Every error an HTTP handler can produce, already carrying its message and
/// status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A 400: the request itself was malformed. `message` is the exact body
    /// text (no trailing newline here; `IntoResponse` appends it).
    #[error("{message}")]
    Validation { message: String },
    /// A 500: a downstream service failed, or a handler panicked. Every
    /// non-validation failure collapses to this one generic message; the
    /// taxonomy lives in `ServiceError`, not here.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation { message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    /// Handlers don't inspect a `ServiceError` beyond its presence; every
    /// variant collapses to the same generic 500, including `NotFound`.
    fn from(_: ServiceError) -> Self {
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string()),
        };

        // Every error body is terminated with a trailing newline.
        (status, format!("{message}\n")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn validation_error_has_trailing_newline() {
        let response = ApiError::validation("product id not valid").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "product id not valid\n");
    }

    #[tokio::test]
    async fn service_errors_collapse_to_internal_error() {
        let response: Response = ApiError::from(ServiceError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, "internal error\n");
    }
}
