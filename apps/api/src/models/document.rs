use bytes::Bytes;
use serde::Serialize;

use crate::llm_client::PDF_MEDIA_TYPE;

/// A file received from the upload form. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// Metadata shown to the user once a file is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
    /// Size in KB rounded to one decimal.
    pub size_kb: f64,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A file counts as a PDF when its name has a `.pdf` extension or it was
    /// declared as `application/pdf`.
    pub fn is_pdf(&self) -> bool {
        has_pdf_extension(&self.file_name) || self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }

    pub fn summary(&self) -> DocumentSummary {
        let size_bytes = self.size();
        DocumentSummary {
            file_name: self.file_name.clone(),
            media_type: PDF_MEDIA_TYPE.to_string(),
            size_bytes,
            size_kb: (size_bytes as f64 / 1024.0 * 10.0).round() / 10.0,
        }
    }
}

fn has_pdf_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
