use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::document::UploadedDocument;

/// Name of the form field carrying the PDF.
pub const FILE_FIELD: &str = "file";

/// Pulls the `file` field out of a multipart upload and checks that it is a
/// non-empty PDF. Runs before anything is encoded or sent.
///
/// `max_upload_bytes` is the body cap applied by the router; it only shapes
/// the message returned when that cap is hit.
pub async fn read_pdf_upload(
    multipart: &mut Multipart,
    max_upload_bytes: usize,
) -> Result<UploadedDocument, AppError> {
    let map_upload_error = |e: MultipartError| upload_error(e, max_upload_bytes);

    while let Some(field) = multipart.next_field().await.map_err(map_upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let media_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(map_upload_error)?;

        debug!(file_name = %file_name, media_type = %media_type, bytes = bytes.len(), "File upload received");

        let document = UploadedDocument::new(file_name, media_type, bytes);
        if !document.is_pdf() {
            warn!(file_name = %document.file_name, media_type = %document.media_type, "Rejected non-PDF upload");
            return Err(AppError::UnsupportedMediaType(format!(
                "'{}' is not a PDF file ({})",
                document.file_name, document.media_type
            )));
        }
        if document.is_empty() {
            return Err(AppError::Validation(format!(
                "'{}' is empty",
                document.file_name
            )));
        }
        return Ok(document);
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn upload_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(limit = max_upload_bytes, "Rejected upload over the size limit");
        return AppError::PayloadTooLarge(format!(
            "The file exceeds the {} upload limit",
            describe_size(max_upload_bytes)
        ));
    }
    AppError::Upload(e)
}

/// Renders a byte count in the largest whole unit: `32 MB`, `1 KB`, `1500 bytes`.
pub fn describe_size(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    const KB: usize = 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} bytes")
    }
}
