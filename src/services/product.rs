//! Product service: retrieve and replace a product's configured pack sizes.
//! A thin pass-through over the registry with no validation of its own; the
//! request layer already validated before calling in.

use crate::domain::{PackSet, Product};
use crate::error::ServiceError;
use crate::registry::PackSizeRegistry;

/// Retrieves and updates a product's pack sizes via the registry.
#[derive(Clone)]
pub struct ProductService {
    registry: PackSizeRegistry,
}

impl ProductService {
    pub fn new(registry: PackSizeRegistry) -> Self {
        Self { registry }
    }

    /// Returns the product's currently configured pack sizes, or
    /// [`ServiceError::NotFound`] if none have ever been stored.
    pub fn pack_sizes(&self, pid: u64) -> Result<Product, ServiceError> {
        let packs = self.registry.lookup(pid).ok_or(ServiceError::NotFound)?;
        Ok(Product { pid, packs })
    }

    /// Stores `packs` as the product's pack set, replacing any prior value,
    /// and returns the freshly stored [`Product`] so the HTTP handler can
    /// echo a stable canonical shape. The registry stores `packs` exactly as
    /// given; it does not canonicalize.
    pub fn update(&self, pid: u64, packs: PackSet) -> Result<Product, ServiceError> {
        self.registry.store(pid, packs.clone());
        Ok(Product { pid, packs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_sizes_of_unknown_product_is_not_found() {
        let service = ProductService::new(PackSizeRegistry::new());
        assert_eq!(service.pack_sizes(1), Err(ServiceError::NotFound));
    }

    #[test]
    fn update_then_pack_sizes_round_trips_without_canonicalizing() {
        let service = ProductService::new(PackSizeRegistry::new());
        let stored = service.update(1, PackSet(vec![12, 5, 10])).unwrap();
        assert_eq!(stored, Product { pid: 1, packs: PackSet(vec![12, 5, 10]) });
        assert_eq!(service.pack_sizes(1).unwrap(), stored);
    }

    #[test]
    fn update_replaces_prior_pack_set() {
        let service = ProductService::new(PackSizeRegistry::new());
        service.update(1, PackSet(vec![5, 10])).unwrap();
        let stored = service.update(1, PackSet(vec![23, 31, 53])).unwrap();
        assert_eq!(stored.packs, PackSet(vec![23, 31, 53]));
    }
}
