//! Error types for the cvkit library.

use std::io;
use thiserror::Error;

/// Result type alias for cvkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while importing or exporting resumes.
///
/// Heuristic non-matches are never errors; a resume import only fails when
/// the input bytes cannot be read as a PDF with a text layer.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF has no readable text layer or its structure is unreadable.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// Error serializing or deserializing a resume as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error assembling the output PDF.
    #[error("PDF write error: {0}")]
    PdfWrite(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Extraction(err.to_string()),
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::Extraction(err.to_string())
    }
}
