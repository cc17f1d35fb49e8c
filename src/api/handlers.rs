//! API handlers for the alert summary service

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::api::models::AlertSummaryQuery;
use crate::error::Result;
use crate::rules::GetAlertSummaryParams;
use crate::types::AlertSummary;
use crate::usage::{track_deprecated_route_usage, INSTANCE_SUMMARY_COUNTER};
use crate::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "alertsrv",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Read the instance summary of one rule.
///
/// Success returns the client's record unchanged. A not-found from the client
/// passes through verbatim; anything else goes through the generic error
/// translation in [`crate::error`].
pub async fn get_alert_instance_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AlertSummaryQuery>,
) -> Result<Json<AlertSummary>> {
    state.license.verify_api_access()?;
    track_deprecated_route_usage(INSTANCE_SUMMARY_COUNTER, state.usage_counter.as_ref());

    debug!("Fetching alert summary for rule {}", id);
    let summary = state
        .rules_client
        .get_alert_summary(GetAlertSummaryParams {
            id,
            date_start: query.date_start,
        })
        .await?;

    Ok(Json(summary))
}
