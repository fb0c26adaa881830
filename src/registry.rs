//! The pack-size registry: an in-memory, process-lifetime mapping from
//! product id to configured pack sizes.
//!
//! A single `RwLock`-guarded `HashMap` behind an `Arc`, cloned cheaply into
//! every service that needs read or write access. `std::sync::RwLock` gives
//! multiple-readers/single-writer semantics without pulling in a
//! concurrent-map crate for a table this small.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::PackSet;

/// Concurrently accessible pid -> pack-set mapping, owned for the lifetime
/// of the process and threaded through services via dependency injection
/// rather than kept as module-level state.
#[derive(Clone, Default)]
pub struct PackSizeRegistry {
    inner: Arc<RwLock<HashMap<u64, PackSet>>>,
}

impl PackSizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces any existing pack set for `pid` with `packs`.
    /// Stored as-provided; canonicalization is the optimizer's concern, not
    /// the registry's.
    pub fn store(&self, pid: u64, packs: PackSet) {
        let mut guard = self.inner.write().expect("pack size registry lock poisoned");
        guard.insert(pid, packs);
    }

    /// Returns a stable, owned snapshot of `pid`'s pack set, or `None` if
    /// `pid` has never been stored. Missing-pid is a normal result, not an
    /// error. A concurrent `store` can never mutate what's returned here,
    /// since the clone is taken while the read lock is held.
    pub fn lookup(&self, pid: u64) -> Option<PackSet> {
        let guard = self.inner.read().expect("pack size registry lock poisoned");
        guard.get(&pid).cloned()
    }
}
