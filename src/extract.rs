//! PDF text extraction.
//!
//! Converts a PDF byte stream into the flat sequence of trimmed, non-empty
//! text lines the heuristic parser consumes. This is the only stage of the
//! import path that can fail: unreadable bytes, encrypted documents, and
//! PDFs without a text layer all surface as errors here, while everything
//! downstream is total over the line sequence.

use unicode_normalization::UnicodeNormalization;

use crate::detect::detect_pdf;
use crate::error::{Error, Result};

/// Extract the visible text layer of a PDF as normalized lines.
///
/// Each returned line is NFC-normalized, has internal whitespace runs
/// collapsed to single spaces, and is non-empty after trimming.
pub fn extract_lines(data: &[u8]) -> Result<Vec<String>> {
    let text = extract_text(data)?;
    Ok(normalize_lines(&text))
}

/// Extract the raw text layer of a PDF.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let version = detect_pdf(data)?;
    log::debug!("Extracting text from PDF {}", version);

    // Probe structure and encryption up front; pdf-extract's own errors for
    // these cases are less specific.
    let doc = lopdf::Document::load_mem(data)?;
    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }

    let text = pdf_extract::extract_text_from_mem(data)?;
    if text.trim().is_empty() {
        return Err(Error::Extraction(
            "document has no extractable text layer".to_string(),
        ));
    }

    Ok(text)
}

/// Split raw extracted text into trimmed, whitespace-collapsed lines,
/// dropping empties.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.nfc()
        .collect::<String>()
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
