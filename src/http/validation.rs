//! Pure validation functions for the request layer: each function here just
//! says what's wrong as a `Result`, and the handler decides what to do with
//! it (build the response once, at the outer edge).

use crate::http::error::ApiError;

/// The largest order quantity the system will fulfil.
pub const MAX_ORDER: u64 = 10_000_000;

/// Validates the `{pid}` path variable: must parse as a positive integer.
pub fn validate_pid(raw: &str) -> Result<u64, ApiError> {
    match raw.parse::<i64>() {
        Ok(pid) if pid > 0 => Ok(pid as u64),
        _ => Err(ApiError::validation("product id not valid")),
    }
}

/// Validates the `order` query parameter: must be present, parse as a
/// positive integer, and not exceed [`MAX_ORDER`].
pub fn validate_order(raw: Option<&str>) -> Result<u64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::validation("order query parameter must be specified"))?;

    let order = raw
        .parse::<i64>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ApiError::validation("order query parameter not valid"))?;

    let order = order as u64;
    if order > MAX_ORDER {
        return Err(ApiError::validation(format!("order too large: maximum {MAX_ORDER}")));
    }

    Ok(order)
}

/// Validates a decoded pack-sizes request body: every element must be a
/// positive integer. Returns the pack sizes as `u64`s, preserving order.
pub fn validate_pack_sizes(sizes: &[i64]) -> Result<Vec<u64>, ApiError> {
    if sizes.iter().any(|&size| size <= 0) {
        return Err(ApiError::validation("pack sizes must be positive integers"));
    }
    Ok(sizes.iter().map(|&size| size as u64).collect())
}
