//! Shipping service: orchestrates a single shipping calculation, with
//! cancellation checked between the registry lookup and the optimizer call,
//! and inside the optimizer's own loop.

use crate::domain::{Order, Shipping};
use crate::error::ServiceError;
use crate::optimizer::{self, Cancellation, NeverCancelled};
use crate::registry::PackSizeRegistry;

/// Wraps a registry read path plus the optimizer core to answer "how should
/// this order be shipped?".
#[derive(Clone)]
pub struct ShippingService {
    registry: PackSizeRegistry,
}

impl ShippingService {
    pub fn new(registry: PackSizeRegistry) -> Self {
        Self { registry }
    }

    /// Computes the least-excess, least-pack-count shipment for `order`.
    ///
    /// 1. Rejects `order.qty == 0` with [`ServiceError::EmptyOrder`].
    /// 2. Looks up the product's pack sizes; [`ServiceError::NotFound`] if
    ///    none (or an empty set) are configured.
    /// 3. Invokes the optimizer.
    /// 4. Assembles the [`Shipping`] record, computing `excess = total - qty`.
    pub fn calculate(
        &self,
        order: Order,
        cancellation: &dyn Cancellation,
    ) -> Result<Shipping, ServiceError> {
        if order.qty == 0 {
            return Err(ServiceError::EmptyOrder);
        }

        let pack_set = self.registry.lookup(order.pid).ok_or(ServiceError::NotFound)?;
        if pack_set.as_slice().is_empty() {
            return Err(ServiceError::NotFound);
        }

        if cancellation.is_cancelled() {
            return Err(ServiceError::Cancelled);
        }

        let result = optimizer::optimize(pack_set.as_slice(), order.qty, cancellation)?;

        Ok(Shipping {
            pid: order.pid,
            order: order.qty,
            excess: result.total - order.qty,
            packs: result.packs,
            packs_count: result.packs_count,
            total: result.total,
        })
    }

    /// Convenience for callers that don't carry a cancellation token
    /// (e.g. unit tests).
    pub fn calculate_uncancellable(&self, order: Order) -> Result<Shipping, ServiceError> {
        self.calculate(order, &NeverCancelled)
    }
}
