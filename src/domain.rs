//! Entities shared by the registry, the services, and the HTTP layer.

use serde::{Deserialize, Serialize};

/// A product's configured pack sizes, in the order they were stored.
///
/// The registry does not canonicalize this on `Store`; ascending order is
/// the optimizer's internal concern, not a registry invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackSet(pub Vec<u64>);

impl PackSet {
    /// Returns `true` if every element is a positive pack size.
    ///
    /// An empty set is not rejected here: the registry itself accepts empty
    /// sets; a product with an empty set simply cannot be shipped (caught
    /// by the shipping service).
    pub fn all_positive(&self) -> bool {
        self.0.iter().all(|&size| size > 0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

/// A product identified by a positive integer id, with its configured packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub pid: u64,
    pub packs: PackSet,
}

/// A customer order: ship at least `qty` items of product `pid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub pid: u64,
    pub qty: u64,
}

/// `quantity` packs of `pack_size` items, as part of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pack {
    pub pack_size: u64,
    pub quantity: u64,
}

/// The result of optimizing a shipment for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipping {
    pub pid: u64,
    pub order: u64,
    pub packs: Vec<Pack>,
    pub packs_count: u64,
    pub total: u64,
    pub excess: u64,
}
