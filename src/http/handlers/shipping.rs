//! Shipping calculation handler: `GET /product/{pid}/shipping-calculation`.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::domain::Order;
use crate::http::error::ApiError;
use crate::http::handlers::AppState;
use crate::http::validation::{validate_order, validate_pid};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PackResponse {
    pub packsize: u64,
    pub quantity: u64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShippingCalculationResponse {
    pub order: u64,
    pub packs: Vec<PackResponse>,
    pub packscount: u64,
    pub total: u64,
    pub excess: u64,
}

pub async fn calculate(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ShippingCalculationResponse>, ApiError> {
    let pid = validate_pid(&pid)?;
    let order = validate_order(query.get("order").map(String::as_str))?;

    // Threads the process-wide shutdown token into the optimizer: a
    // shipping calculation in flight for a large `Q` stops promptly once a
    // shutdown signal fires, rather than running to completion inside the
    // drain window.
    let shipping = state
        .shipping_service
        .calculate(Order { pid, qty: order }, &state.shutdown)?;

    let packs = shipping
        .packs
        .into_iter()
        .filter(|pack| pack.quantity > 0)
        .map(|pack| PackResponse { packsize: pack.pack_size, quantity: pack.quantity })
        .collect();

    Ok(Json(ShippingCalculationResponse {
        order: shipping.order,
        packs,
        packscount: shipping.packs_count,
        total: shipping.total,
        excess: shipping.excess,
    }))
}
