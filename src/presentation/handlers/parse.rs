use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::ParseRequest;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub task_id: String,
}

/// Accepts a multipart upload and starts parsing it in the background.
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_parse_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.file_name().is_some() => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Parse request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime = field.content_type().map(str::to_string);

    tracing::debug!(filename = %filename, content_type = ?mime, "Processing file upload");

    let content_type = match ContentType::detect(mime.as_deref(), &filename) {
        Some(ct) => ct,
        None => {
            tracing::warn!(filename = %filename, content_type = ?mime, "Unsupported file type");
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported file type: {}", filename),
            );
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    let document = Document::new(filename, content_type, data.len() as u64);
    let request = ParseRequest { document, data };

    match state.tracker.submit(request).await {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(SubmitResponse {
                task_id: job_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create parse job");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create job: {}", e),
            )
        }
    }
}
