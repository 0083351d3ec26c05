use bytes::Bytes;

use crate::errors::AppError;

/// Accepts any filename ending in `.pdf`, ignoring case.
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

/// Extracts plain text from an in-memory PDF.
///
/// `pdf-extract` is CPU-bound and may panic on malformed input, so it runs on
/// the blocking pool and a panic surfaces as an extraction error.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Extraction(format!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))
}
