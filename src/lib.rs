//! `shipping-optimizer`: an HTTP service computing least-excess,
//! least-pack-count shipment plans from a product's configured pack sizes.
//!
//! Library-style module layout: `main.rs` is bootstrap only, everything else
//! lives here so integration tests can assemble the router directly.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod optimizer;
pub mod registry;
pub mod services;
pub mod telemetry;
