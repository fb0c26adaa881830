//! Product pack-size handlers: `GET`/`POST /product/{pid}/packsizes`.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::PackSet;
use crate::http::error::ApiError;
use crate::http::handlers::AppState;
use crate::http::validation::{validate_pack_sizes, validate_pid};

/// Shape of both the GET response and the POST echo.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProductPackSizesResponse {
    pub pid: u64,
    pub packs: Vec<u64>,
}

pub async fn get_pack_sizes(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<ProductPackSizesResponse>, ApiError> {
    let pid = validate_pid(&pid)?;

    let product = state.product_service.pack_sizes(pid)?;

    Ok(Json(ProductPackSizesResponse { pid: product.pid, packs: product.packs.0 }))
}

/// Shape of the request body accepted by `POST /product/{pid}/packsizes`.
/// Elements are decoded as `i64` rather than `u64` so that negative sizes
/// decode successfully and are rejected by [`validate_pack_sizes`] with a
/// specific message, instead of failing JSON decoding first with a generic
/// one.
#[derive(Debug, Deserialize)]
pub struct ProductPackSizesRequest {
    pub packs: Vec<i64>,
}

pub async fn store_pack_sizes(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    body: Result<Json<ProductPackSizesRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<ProductPackSizesResponse>, ApiError> {
    let pid = validate_pid(&pid)?;

    let Json(request) = body.map_err(|_| ApiError::validation("invalid request payload"))?;
    let packs = validate_pack_sizes(&request.packs)?;

    let product = state.product_service.update(pid, PackSet(packs))?;

    Ok(Json(ProductPackSizesResponse { pid: product.pid, packs: product.packs.0 }))
}
