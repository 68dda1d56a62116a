//! Section table and custom section types.

use serde::{Deserialize, Serialize};

/// The closed set of section categories a resume can display.
///
/// Both the parser and the layout engine match exhaustively on this enum, so
/// adding a category is a compile-time-visible change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Custom,
}

impl SectionKind {
    /// Default display title for a built-in section.
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Summary => "Professional Summary",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Languages => "Languages",
            Self::Custom => "Custom Section",
        }
    }

    /// Stable id used in the section table for built-in sections. Custom
    /// sections use their own generated id instead.
    pub fn builtin_id(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Languages => "languages",
            Self::Custom => "custom",
        }
    }
}

/// One row in the resume's section table: which block it is, what to call
/// it, whether to show it, and where it sits in the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    pub visible: bool,
    pub order: usize,
}

impl Section {
    /// Build the section-table row for a built-in category.
    pub fn builtin(kind: SectionKind, visible: bool, order: usize) -> Self {
        Self {
            id: kind.builtin_id().to_string(),
            kind,
            title: kind.default_title().to_string(),
            visible,
            order,
        }
    }
}

/// How a custom section's content items are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Items render as flowing paragraphs.
    Text,
    /// Items render as bulleted lines.
    List,
    /// Items render as separate paragraphs with an entry gap between them.
    Structured,
}

/// One content item in a custom section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub text: String,
}

impl ContentItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A user-defined section. Its `id` is shared with the matching row in the
/// resume's section table; the two are created and removed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub content: Vec<ContentItem>,
}
