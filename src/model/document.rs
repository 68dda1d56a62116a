//! The root resume aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{
    new_id, Certification, ContentKind, CustomSection, Education, Language, PersonalInfo, Project,
    Section, SectionKind, Skill, WorkExperience,
};

/// Visual template tag carried by a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Classic,
    #[default]
    Modern,
    Minimal,
    Technical,
}

/// A structured resume.
///
/// The section table (`sections`) holds exactly one row per built-in
/// category plus one row per custom section, with `order` values forming a
/// dense permutation of `0..n-1`. The mutating methods on this type keep
/// that invariant; external editors that write fields directly are expected
/// to do the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub custom_sections: Vec<CustomSection>,
    pub sections: Vec<Section>,
    pub template: Template,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// Create an empty resume with the default section table.
    ///
    /// Certifications and languages start hidden; everything else is
    /// visible. All content lists are empty.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: "Untitled Resume".to_string(),
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            custom_sections: Vec::new(),
            sections: Self::default_sections(),
            template: Template::Modern,
            created_at: now,
            updated_at: now,
        }
    }

    fn default_sections() -> Vec<Section> {
        vec![
            Section::builtin(SectionKind::PersonalInfo, true, 0),
            Section::builtin(SectionKind::Summary, true, 1),
            Section::builtin(SectionKind::Experience, true, 2),
            Section::builtin(SectionKind::Education, true, 3),
            Section::builtin(SectionKind::Skills, true, 4),
            Section::builtin(SectionKind::Projects, true, 5),
            Section::builtin(SectionKind::Certifications, false, 6),
            Section::builtin(SectionKind::Languages, false, 7),
        ]
    }

    /// Stamp the last-modified timestamp. Called by every mutating method;
    /// external field editors should call it after direct writes.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Add a custom section and its section-table row atomically.
    ///
    /// The new row is appended at the end of the display order. Returns the
    /// shared id of the pair.
    pub fn add_custom_section(&mut self, title: impl Into<String>, kind: ContentKind) -> String {
        let id = new_id();
        let title = title.into();
        let order = self.sections.len();
        self.custom_sections.push(CustomSection {
            id: id.clone(),
            title: title.clone(),
            kind,
            content: Vec::new(),
        });
        self.sections.push(Section {
            id: id.clone(),
            kind: SectionKind::Custom,
            title,
            visible: true,
            order,
        });
        self.touch();
        id
    }

    /// Remove a custom section and its section-table row atomically,
    /// re-densifying the remaining order values. Returns false if no custom
    /// section with that id exists.
    pub fn remove_custom_section(&mut self, id: &str) -> bool {
        let before = self.custom_sections.len();
        self.custom_sections.retain(|cs| cs.id != id);
        if self.custom_sections.len() == before {
            return false;
        }
        self.sections.retain(|s| s.id != id);
        self.renumber_sections();
        self.touch();
        true
    }

    /// Toggle visibility of a section by id. Returns false for unknown ids.
    pub fn set_section_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.visible = visible;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Move a section to a new display position, shifting the others to
    /// keep the order values a dense permutation.
    pub fn move_section(&mut self, id: &str, new_order: usize) -> bool {
        let Some(current) = self.sections.iter().find(|s| s.id == id).map(|s| s.order) else {
            return false;
        };
        let new_order = new_order.min(self.sections.len().saturating_sub(1));
        for section in &mut self.sections {
            if section.id == id {
                section.order = new_order;
            } else if current < new_order && (current + 1..=new_order).contains(&section.order) {
                section.order -= 1;
            } else if new_order < current && (new_order..current).contains(&section.order) {
                section.order += 1;
            }
        }
        self.touch();
        true
    }

    /// Visible sections in ascending display order.
    pub fn visible_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().filter(|s| s.visible).collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Look up a custom section by its shared id.
    pub fn custom_section(&self, id: &str) -> Option<&CustomSection> {
        self.custom_sections.iter().find(|cs| cs.id == id)
    }

    /// Serialize to pretty-printed JSON with every field present.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, backfilling a missing id and re-stamping the
    /// modification time, so documents exported by other tooling import
    /// cleanly.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut resume: Resume = serde_json::from_str(json)?;
        if resume.id.is_empty() {
            resume.id = new_id();
        }
        resume.touch();
        Ok(resume)
    }

    fn renumber_sections(&mut self) {
        let mut ordered: Vec<usize> = (0..self.sections.len()).collect();
        ordered.sort_by_key(|&i| self.sections[i].order);
        for (rank, idx) in ordered.into_iter().enumerate() {
            self.sections[idx].order = rank;
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}
