use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// Omitted when the job store cannot be counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_jobs: Option<usize>,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tracked_jobs = match state.tracker.len().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to count tracked jobs");
            None
        }
    };
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            tracked_jobs,
        }),
    )
}
