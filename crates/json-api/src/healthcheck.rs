//! Liveness Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Liveness report for the receipts API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server can answer requests
    pub status: String,

    /// Version of the `tally-json` binary answering
    pub version: String,
}

/// Healthcheck handler
///
/// Answers without touching receipt storage, so it only reports that the
/// process is up.
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
