//! Service-route middleware: request logging, JSON content-type, panic
//! recovery, applied in that outer-to-inner order. Logging and panic
//! recovery are `tower_http` layers (`TraceLayer`, `CatchPanicLayer`);
//! content-type is a small `axum::middleware::from_fn`, since no existing
//! tower layer sets a fixed response header directly.

use axum::extract::Request;
use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;

/// Sets `Content-Type: application/json` on every response from a service
/// route.
pub async fn set_json_content_type(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
