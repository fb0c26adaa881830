//! HTTP server assembly and lifecycle: router construction and the
//! listen/serve/graceful-shutdown loop.

use std::future::Future;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{health, product, shipping, AppState};
use crate::http::middleware::set_json_content_type;

/// The drain timeout graceful shutdown waits before forcibly closing
/// remaining connections.
pub const SHUTDOWN_DRAIN: Duration = Duration::from_secs(10);

/// Read/write/idle timeout applied to every request. Axum's `serve` doesn't
/// expose discrete read/write/idle knobs; a single request-handling timeout
/// is the closest equivalent.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assembles the full router: the health endpoint (unwrapped, with no
/// middleware applied to it), and the three service routes, each wrapped in
/// request logging -> JSON content-type -> panic recovery (outer to inner),
/// plus a permissive CORS layer answering `OPTIONS` preflight on every
/// service path.
pub fn router(state: AppState) -> Router {
    let service_middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(set_json_content_type))
        .layer(CatchPanicLayer::new());

    let service_routes = Router::new()
        .route(
            "/product/:pid/packsizes",
            get(product::get_pack_sizes).post(product::store_pack_sizes),
        )
        .route("/product/:pid/shipping-calculation", get(shipping::calculate))
        .route_layer(service_middleware);

    Router::new()
        .route("/health", get(health::get_health))
        .merge(service_routes)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

/// Serves `app` on `addr` until `shutdown` resolves, then drains in-flight
/// requests for up to [`SHUTDOWN_DRAIN`] before returning. `cancel` is the
/// same [`tokio_util::sync::CancellationToken`] threaded into `AppState`: it
/// fires as soon as `shutdown` resolves, so an in-flight shipping
/// calculation's optimizer loop stops cooperatively instead of running
/// unbounded inside the drain window.
pub async fn serve(
    app: Router,
    addr: std::net::SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
    cancel: tokio_util::sync::CancellationToken,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "starting api");

    let serving = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown.await;
        tracing::info!("stopping server...");
        cancel.cancel();
    });

    match tokio::time::timeout(SHUTDOWN_DRAIN, serving).await {
        Ok(result) => {
            result?;
            tracing::info!("server stopped gracefully");
        }
        Err(_) => {
            tracing::warn!("server shutdown drain timed out after {SHUTDOWN_DRAIN:?}, forcing close");
        }
    }

    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::registry::PackSizeRegistry;

    fn app() -> Router {
        router(AppState::new(PackSizeRegistry::new()))
    }

    #[tokio::test]
    async fn health_endpoint_is_200_json() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn options_preflight_on_service_route_is_acknowledged() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/product/1/packsizes")
                    .header("Access-Control-Request-Method", "GET")
                    .header("Origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn invalid_pid_on_service_route_is_400_with_json_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/product/abc/packsizes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "product id not valid\n".as_bytes());
    }
}
