//! # cvkit
//!
//! Resume PDF import and export for Rust.
//!
//! The import side extracts text from an existing resume PDF and runs a
//! heuristic parser over it to recover contact details, work history,
//! education, skills, and the other standard resume sections. The export
//! side lays a resume out into paginated draw operations and serializes
//! them to a fresh PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cvkit::{import_file, export_pdf_file};
//!
//! fn main() -> cvkit::Result<()> {
//!     // Pull structured data out of an existing resume PDF
//!     let resume = import_file("resume.pdf")?;
//!     println!("{}", resume.personal_info.full_name);
//!
//!     // Write it back out as a fresh, uniformly formatted PDF
//!     export_pdf_file(&resume, "formatted.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heuristic import**: keyword-driven section splitting, contact
//!   extraction, and entry reconstruction from plain PDF text
//! - **Deterministic layout**: a cursor-based pagination engine with
//!   measured Helvetica widths and greedy word wrap
//! - **PDF export**: A4 output built on lopdf content streams
//! - **JSON round trip**: every model type serializes with serde

pub mod detect;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use detect::{detect_pdf, is_pdf_bytes};
pub use error::{Error, Result};
pub use layout::{DrawOp, LaidPage, LayoutEngine, PageGeometry, PaginatedDocument};
pub use model::{
    Certification, ContentItem, ContentKind, CustomSection, Education, Language,
    LanguageProficiency, PersonalInfo, Project, Resume, Section, SectionKind, Skill, SkillLevel,
    Template, WorkExperience,
};
pub use parser::ResumeParser;

use std::io::Read;
use std::path::Path;

/// Import a resume from PDF bytes.
///
/// Extracts the text layer, normalizes it into lines, and runs the
/// heuristic parser. Parsing itself never fails; only extraction can
/// (not a PDF, encrypted, or no text layer).
///
/// # Example
///
/// ```no_run
/// use cvkit::import_bytes;
///
/// let data = std::fs::read("resume.pdf").unwrap();
/// let resume = import_bytes(&data).unwrap();
/// println!("{} experience entries", resume.experience.len());
/// ```
pub fn import_bytes(data: &[u8]) -> Result<Resume> {
    let lines = extract::extract_lines(data)?;
    Ok(ResumeParser::new().parse_lines(&lines))
}

/// Import a resume from a PDF file on disk.
///
/// # Example
///
/// ```no_run
/// use cvkit::import_file;
///
/// let resume = import_file("resume.pdf").unwrap();
/// println!("{}", resume.title);
/// ```
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let data = std::fs::read(path)?;
    import_bytes(&data)
}

/// Import a resume from any reader.
///
/// # Example
///
/// ```no_run
/// use cvkit::import_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let resume = import_reader(file).unwrap();
/// ```
pub fn import_reader<R: Read>(mut reader: R) -> Result<Resume> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    import_bytes(&data)
}

/// Lay a resume out into pages of draw operations using the default
/// page geometry.
pub fn render(resume: &Resume) -> PaginatedDocument {
    LayoutEngine::new(PageGeometry::default()).render(resume)
}

/// Lay out and serialize a resume to PDF bytes.
///
/// # Example
///
/// ```no_run
/// use cvkit::{export_pdf, Resume};
///
/// let resume = Resume::new();
/// let bytes = export_pdf(&resume).unwrap();
/// std::fs::write("out.pdf", bytes).unwrap();
/// ```
pub fn export_pdf(resume: &Resume) -> Result<Vec<u8>> {
    writer::write_pdf(&render(resume))
}

/// Lay out and write a resume PDF to disk.
pub fn export_pdf_file<P: AsRef<Path>>(resume: &Resume, path: P) -> Result<()> {
    let bytes = export_pdf(resume)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
