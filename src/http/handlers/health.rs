//! Health endpoint: `GET /health` always returns 200 with the current status
//! and timestamp.

use axum::Json;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
}

pub async fn get_health() -> Json<HealthResponse> {
    tracing::info!("checking server health");

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    Json(HealthResponse { status: "healthy", time })
}
