//! The HTTP boundary: request validation, response shaping, routing, and
//! middleware, built on `axum` and `tower`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod validation;

pub use error::ApiError;
