//! Service-level error taxonomy.
//!
//! Kept separate from `http::error::ApiError`: services never format an
//! HTTP response themselves, they just say what went wrong, and the HTTP
//! boundary decides how to present it.

/// Errors a service can return. Validation errors are deliberately absent
/// here: the request layer rejects malformed input before a service is ever
/// invoked.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The product has no registered pack set.
    #[error("no pack sizes found for product")]
    NotFound,
    /// `qty` was zero, reaching the service despite request-layer
    /// validation (defensive).
    #[error("empty order")]
    EmptyOrder,
    /// The in-flight request's cancellation token fired.
    #[error("request cancelled")]
    Cancelled,
}

impl From<crate::optimizer::OptimizerError> for ServiceError {
    fn from(err: crate::optimizer::OptimizerError) -> Self {
        match err {
            crate::optimizer::OptimizerError::EmptyOrder => ServiceError::EmptyOrder,
            crate::optimizer::OptimizerError::Cancelled => ServiceError::Cancelled,
        }
    }
}
