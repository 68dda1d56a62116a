//! PDF format detection.
//!
//! A cheap magic-byte check run before handing bytes to the text extractor,
//! so obviously-wrong inputs (HTML, DOCX, plain text) fail fast with
//! `Error::UnknownFormat` instead of a confusing downstream parse error.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g. "1.7"

/// Verify that `data` starts with a PDF header and return the version tag.
pub fn detect_pdf(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    if !(version[0].is_ascii_digit() && version[1] == b'.' && version[2].is_ascii_digit()) {
        return Err(Error::UnknownFormat);
    }

    Ok(String::from_utf8_lossy(version).into_owned())
}

/// Check whether bytes look like a PDF without reporting why not.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_pdf(data).is_ok()
}
