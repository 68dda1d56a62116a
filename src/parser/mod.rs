//! Heuristic field parser.
//!
//! Recovers a structured [`Resume`](crate::model::Resume) from the flat line
//! sequence of an arbitrary resume PDF. Every sub-parser rescans the full
//! line list independently, trading redundant scans for resilience: a
//! malformed or missing section never blocks extraction of the others, and
//! no heuristic step can fail. Ambiguous input degrades to empty fields.

mod contact;
mod education;
mod experience;
mod keywords;
mod patterns;
mod sections;
mod simple;

pub use keywords::Category;
pub use patterns::Patterns;

use crate::model::Resume;

/// Line-sequence to resume parser. Compiles its regex set once; reusable
/// across documents and cheap to share.
pub struct ResumeParser {
    patterns: Patterns,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
        }
    }

    /// Build a resume from extracted text lines.
    ///
    /// Total over any input: fields whose section or pattern never matches
    /// are left at their defaults from [`Resume::new`].
    pub fn parse_lines(&self, lines: &[String]) -> Resume {
        let mut resume = Resume::new();
        let text = lines.join(" ");

        resume.personal_info = contact::extract(&self.patterns, &text, lines);
        resume.summary = simple::summary(sections::body_slice(lines, Category::Summary));
        resume.experience =
            experience::parse(&self.patterns, sections::body_slice(lines, Category::Experience));
        resume.education =
            education::parse(&self.patterns, sections::body_slice(lines, Category::Education));
        resume.skills = simple::skills(sections::body_slice(lines, Category::Skills));
        resume.certifications = simple::certifications(
            &self.patterns,
            sections::body_slice(lines, Category::Certifications),
        );
        resume.languages =
            simple::languages(&self.patterns, sections::body_slice(lines, Category::Languages));

        if !resume.personal_info.full_name.is_empty() {
            resume.title = format!("{} - Resume", resume.personal_info.full_name);
        } else if !lines.is_empty() {
            // Mark documents that yielded text but no recognizable name, so
            // they are distinguishable from freshly created resumes.
            resume.title = "Imported Resume".to_string();
        }

        log::debug!(
            "parsed resume: {} experience, {} education, {} skills, {} certifications, {} languages",
            resume.experience.len(),
            resume.education.len(),
            resume.skills.len(),
            resume.certifications.len(),
            resume.languages.len(),
        );

        resume
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lines_yield_default_resume() {
        let parser = ResumeParser::new();
        let parsed = parser.parse_lines(&[]);
        let blank = Resume::new();

        assert_eq!(parsed.title, blank.title);
        assert_eq!(parsed.personal_info, blank.personal_info);
        assert_eq!(parsed.summary, blank.summary);
        assert_eq!(parsed.experience, blank.experience);
        assert_eq!(parsed.education, blank.education);
        assert_eq!(parsed.skills, blank.skills);
        assert_eq!(parsed.projects, blank.projects);
        assert_eq!(parsed.certifications, blank.certifications);
        assert_eq!(parsed.languages, blank.languages);
        assert_eq!(parsed.custom_sections, blank.custom_sections);
        assert_eq!(parsed.sections, blank.sections);
        assert_eq!(parsed.template, blank.template);
    }

    #[test]
    fn test_title_from_name() {
        let parser = ResumeParser::new();
        let lines = vec!["Jane Doe".to_string()];
        let parsed = parser.parse_lines(&lines);
        assert_eq!(parsed.title, "Jane Doe - Resume");
    }

    #[test]
    fn test_title_marks_import_when_no_name_found() {
        let parser = ResumeParser::new();
        let lines = vec![
            "contact at someone@example.com".to_string(),
            "555-123-4567".to_string(),
        ];
        let parsed = parser.parse_lines(&lines);
        assert_eq!(parsed.title, "Imported Resume");
        assert_eq!(parsed.personal_info.email, "someone@example.com");
    }

    #[test]
    fn test_full_document() {
        let parser = ResumeParser::new();
        let lines: Vec<String> = [
            "Jane Doe",
            "jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe",
            "PROFESSIONAL SUMMARY",
            "Backend engineer focused on reliability.",
            "WORK EXPERIENCE",
            "Senior Engineer",
            "Acme Corp | Remote | Jan 2020 - Present",
            "\u{2022} Led a team of 5",
            "EDUCATION",
            "Bachelor of Science in Computer Science",
            "State University | 2015",
            "SKILLS",
            "Languages: Python, Go, Rust",
            "CERTIFICATIONS",
            "\u{2022} AWS Solutions Architect | Amazon | 2023",
            "LANGUAGES",
            "\u{2022} Spanish (Native)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let parsed = parser.parse_lines(&lines);

        assert_eq!(parsed.personal_info.full_name, "Jane Doe");
        assert_eq!(parsed.personal_info.email, "jane.doe@example.com");
        assert_eq!(parsed.personal_info.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(parsed.summary, "Backend engineer focused on reliability.");
        assert_eq!(parsed.experience.len(), 1);
        assert!(parsed.experience[0].current);
        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.skills.len(), 3);
        assert_eq!(parsed.certifications.len(), 1);
        assert_eq!(parsed.languages.len(), 1);
        assert_eq!(parsed.title, "Jane Doe - Resume");
    }
}
