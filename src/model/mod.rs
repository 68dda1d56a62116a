//! Canonical resume data model.
//!
//! Shared by the heuristic parser (which constructs instances from scratch)
//! and the layout engine (which only reads them). Pure data, serde-friendly:
//! the JSON shape is camelCase with every field present, so documents
//! exchanged with other tooling round-trip unchanged.

mod document;
mod entries;
mod section;

pub use document::{Resume, Template};
pub use entries::{
    Certification, Education, Language, LanguageProficiency, PersonalInfo, Project, Skill,
    SkillLevel, WorkExperience,
};
pub use section::{ContentItem, ContentKind, CustomSection, Section, SectionKind};

/// Generate an opaque unique id for model records.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
