//! Per-section entry types.

use serde::{Deserialize, Serialize};

use super::new_id;

/// Contact block rendered at the top of every resume.
///
/// All fields are plain strings; an empty string means "not set". Consumers
/// (layout engine, preview) skip empty fields rather than treating them as
/// errors, because partially-filled contact info is the common case after a
/// heuristic import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

impl PersonalInfo {
    /// Contact fields in their fixed display order, empty ones excluded.
    pub fn contact_fields(&self) -> Vec<&str> {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.github,
            &self.portfolio,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect()
    }
}

/// A single employment entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// When true the position is ongoing: any stored `end_date` is ignored
    /// and consumers display "Present".
    pub current: bool,
    pub location: String,
    /// Achievement bullets, in display order.
    pub description: Vec<String>,
}

impl WorkExperience {
    /// Create an empty entry seeded with one blank bullet, ready for editing.
    pub fn new() -> Self {
        Self {
            id: new_id(),
            description: vec![String::new()],
            ..Default::default()
        }
    }

    /// Date range as displayed, honoring the `current` flag.
    pub fn date_range(&self) -> String {
        let end = if self.current { "Present" } else { &self.end_date };
        format!("{} - {}", self.start_date, end)
    }
}

/// A single education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: String,
    pub coursework: Vec<String>,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Default::default()
        }
    }
}

/// Proficiency levels for skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A single skill. Grouping into display rows is done by string equality of
/// `category`; the category is deliberately not an enum so imported resumes
/// keep whatever grouping labels they used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: Option<SkillLevel>,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            category: category.into(),
            level: None,
        }
    }
}

/// A portfolio project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Default::default()
        }
    }
}

/// A certification or credential entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub expiration_date: String,
}

impl Certification {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Default::default()
        }
    }
}

/// Spoken-language proficiency, from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageProficiency {
    Native,
    Fluent,
    Professional,
    Conversational,
    Basic,
}

impl std::fmt::Display for LanguageProficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Native => "Native",
            Self::Fluent => "Fluent",
            Self::Professional => "Professional",
            Self::Conversational => "Conversational",
            Self::Basic => "Basic",
        };
        f.write_str(s)
    }
}

/// A spoken language entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: LanguageProficiency,
}

impl Language {
    pub fn new(name: impl Into<String>, proficiency: LanguageProficiency) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            proficiency,
        }
    }
}
