//! HTTP handlers: one module per resource, plus a health handler.

pub mod health;
pub mod product;
pub mod shipping;

use tokio_util::sync::CancellationToken;

use crate::services::product::ProductService;
use crate::services::shipping::ShippingService;

/// Shared application state handed to every handler via axum's `State`
/// extractor. Both services are themselves cheap `Clone`s over an `Arc`-ed
/// registry, so `AppState` is cheap to clone per request too.
///
/// `shutdown` is the process-wide cancellation token: handlers pass it into
/// `ShippingService::calculate`, which threads it into the optimizer's outer
/// loop, so an in-flight large-`Q` calculation stops promptly once a
/// shutdown signal fires instead of holding up the drain timeout.
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub shipping_service: ShippingService,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(registry: crate::registry::PackSizeRegistry) -> Self {
        Self::with_shutdown(registry, CancellationToken::new())
    }

    pub fn with_shutdown(
        registry: crate::registry::PackSizeRegistry,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            product_service: ProductService::new(registry.clone()),
            shipping_service: ShippingService::new(registry),
            shutdown,
        }
    }
}
