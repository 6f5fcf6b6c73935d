//! Text extraction for uploaded resume files.

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// Picks an extractor from the declared content type, falling back to the extension.
pub fn detect_kind(file_name: &str, content_type: Option<&str>) -> Result<DocumentKind, AppError> {
    let mime = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase())
        .unwrap_or_default();
    let name = file_name.to_ascii_lowercase();

    if mime == PDF_MIME || name.ends_with(".pdf") {
        return Ok(DocumentKind::Pdf);
    }
    if mime == DOCX_MIME || name.ends_with(".docx") {
        return Err(AppError::UnsupportedMediaType(
            "DOCX extraction is not supported; upload a PDF or plain-text file".to_string(),
        ));
    }
    if mime.starts_with("text/") || name.ends_with(".txt") || name.ends_with(".md") {
        return Ok(DocumentKind::PlainText);
    }

    Err(AppError::UnsupportedMediaType(format!(
        "Unsupported file '{file_name}'; upload a PDF or plain-text file"
    )))
}

/// Extracts normalized text (LF line endings, trimmed) from raw file bytes.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AppError> {
    let raw = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read PDF: {e}"))
        })?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text file is not valid UTF-8".to_string())
        })?,
    };

    let text = raw.replace("\r\n", "\n").trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the file".to_string(),
        ));
    }
    Ok(text)
}

pub fn check_size(len: usize, max_bytes: usize) -> Result<(), AppError> {
    if len > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {len} bytes; the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Download name for an exported resume.
pub fn export_file_name(timestamp_ms: i64) -> String {
    format!("optimized_resume_{timestamp_ms}.txt")
}
