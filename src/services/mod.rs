//! Services: the thin orchestration layer between the HTTP handlers and the
//! registry/optimizer. Each service is a narrow wrapper over a
//! [`crate::registry::PackSizeRegistry`] clone.

pub mod product;
pub mod shipping;

pub use crate::error::ServiceError;
