//! Axum route handlers for the Review API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::encode::encode_document;
use crate::errors::AppError;
use crate::models::document::DocumentSummary;
use crate::review::upload::read_pdf_upload;
use crate::review::DOWNLOAD_FILE_NAME;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub document: DocumentSummary,
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/review/inspect
///
/// Validates the selected file and returns its metadata. Never triggers analysis.
pub async fn handle_inspect(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DocumentSummary>, AppError> {
    let mut multipart = multipart?;
    let document = read_pdf_upload(&mut multipart, state.max_upload_bytes).await?;
    Ok(Json(document.summary()))
}

/// POST /api/v1/review
///
/// Encodes the uploaded PDF and makes one analysis call. Failures come back as
/// a JSON error carrying the underlying description.
pub async fn handle_review(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReviewResponse>, AppError> {
    let mut multipart = multipart?;
    let document = read_pdf_upload(&mut multipart, state.max_upload_bytes).await?;
    let summary = document.summary();

    let payload = encode_document(&document.bytes);
    info!(file_name = %summary.file_name, size_bytes = summary.size_bytes, "Sending resume for analysis");

    let feedback = state.reviewer.analyze(&payload).await?;

    info!(file_name = %summary.file_name, chars = feedback.len(), "Resume analysis complete");
    Ok(Json(ReviewResponse {
        document: summary,
        feedback,
    }))
}

/// POST /api/v1/review/download
///
/// Returns the feedback text verbatim as a plain-text attachment.
pub async fn handle_download(
    request: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = request?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        request.feedback,
    ))
}
