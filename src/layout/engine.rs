//! The paginated layout engine.
//!
//! Folds a resume into pages of draw operations. The cursor starts at the
//! top margin, advances monotonically through every block, and resets to
//! the top margin whenever a page break is inserted. Breaks happen *before*
//! writing a block, never inside one; only paragraph and bullet text is
//! pre-wrapped, and its wrapped line count sizes the break check.

use crate::model::{
    Certification, ContentKind, CustomSection, Education, Language, PersonalInfo, Project, Resume,
    SectionKind, Skill, WorkExperience,
};

use super::measure::{text_width, wrap};
use super::{DrawOp, LaidPage, PageGeometry, PaginatedDocument};

/// Layout cursor: which page we are on and the current baseline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f32,
}

/// Page-break decision, as a pure function so it is testable without a
/// document: if the next block of `required` height would overflow the
/// content area, move to the top of a fresh page.
pub fn ensure_room(geometry: &PageGeometry, cursor: Cursor, required: f32) -> Cursor {
    if cursor.y + required > geometry.content_height {
        Cursor {
            page: cursor.page + 1,
            y: geometry.top_margin,
        }
    } else {
        cursor
    }
}

/// Vertical gap inserted before every non-first entry in a section.
const ENTRY_GAP: f32 = 5.0;
/// Certification entries pack tighter.
const CERT_GAP: f32 = 3.0;
/// Gap appended after every section body.
const SECTION_GAP: f32 = 5.0;
/// Height reserved for a section header (title line plus underline rule).
const HEADER_HEIGHT: f32 = 15.0;
/// Indent of wrapped value text under skill and technology labels.
const LABEL_INDENT: f32 = 25.0;

/// Renders resumes against a fixed geometry. Stateless between calls; each
/// render owns its own cursor and output buffer.
pub struct LayoutEngine {
    geometry: PageGeometry,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Lay out a resume into pages of draw operations.
    ///
    /// Personal info always renders first as the document masthead; the
    /// remaining sections follow in ascending display order among the
    /// visible ones. A visible section whose backing list is empty is
    /// skipped entirely, header included, so the export matches what a
    /// preview showing only populated sections displays.
    pub fn render(&self, resume: &Resume) -> PaginatedDocument {
        let mut canvas = Canvas::new(&self.geometry);

        self.render_personal(&mut canvas, &resume.personal_info);

        for section in resume.visible_sections() {
            match section.kind {
                SectionKind::PersonalInfo => {}
                SectionKind::Summary => {
                    if !resume.summary.is_empty() {
                        self.render_summary(&mut canvas, &section.title, &resume.summary);
                    }
                }
                SectionKind::Experience => {
                    if !resume.experience.is_empty() {
                        self.render_experience(&mut canvas, &section.title, &resume.experience);
                    }
                }
                SectionKind::Education => {
                    if !resume.education.is_empty() {
                        self.render_education(&mut canvas, &section.title, &resume.education);
                    }
                }
                SectionKind::Skills => {
                    if !resume.skills.is_empty() {
                        self.render_skills(&mut canvas, &section.title, &resume.skills);
                    }
                }
                SectionKind::Projects => {
                    if !resume.projects.is_empty() {
                        self.render_projects(&mut canvas, &section.title, &resume.projects);
                    }
                }
                SectionKind::Certifications => {
                    if !resume.certifications.is_empty() {
                        self.render_certifications(
                            &mut canvas,
                            &section.title,
                            &resume.certifications,
                        );
                    }
                }
                SectionKind::Languages => {
                    if !resume.languages.is_empty() {
                        self.render_languages(&mut canvas, &section.title, &resume.languages);
                    }
                }
                SectionKind::Custom => {
                    if let Some(custom) = resume.custom_section(&section.id) {
                        if !custom.content.is_empty() {
                            self.render_custom(&mut canvas, custom);
                        }
                    }
                }
            }
        }

        PaginatedDocument {
            geometry: self.geometry,
            pages: canvas.pages,
        }
    }

    fn render_personal(&self, c: &mut Canvas, info: &PersonalInfo) {
        let g = &self.geometry;
        c.text(g.left_margin, &info.full_name, g.name_size, true);
        c.advance(10.0);

        let contact = info.contact_fields().join(" | ");
        c.text(g.left_margin, &contact, g.body_size, false);
        c.advance(15.0);
    }

    fn render_summary(&self, c: &mut Canvas, title: &str, summary: &str) {
        c.section_header(title);
        c.paragraph(summary);
        c.advance(SECTION_GAP);
    }

    fn render_experience(&self, c: &mut Canvas, title: &str, entries: &[WorkExperience]) {
        let g = &self.geometry;
        c.section_header(title);

        for (i, exp) in entries.iter().enumerate() {
            if i > 0 {
                c.advance(ENTRY_GAP);
            }
            c.ensure_room(2.0 * g.line_height + 2.0);

            c.text(g.left_margin, &exp.position, g.entry_size, true);
            if !exp.start_date.is_empty() || !exp.end_date.is_empty() || exp.current {
                c.text_right(&exp.date_range(), g.entry_size, false);
            }
            c.advance(g.line_height);

            let company_line = join_present(&[exp.company.as_str(), exp.location.as_str()]);
            c.text(g.left_margin, &company_line, g.body_size, false);
            c.advance(g.line_height + 2.0);

            for bullet in exp.description.iter().filter(|b| !b.trim().is_empty()) {
                c.bullet(bullet);
            }
        }
        c.advance(SECTION_GAP);
    }

    fn render_education(&self, c: &mut Canvas, title: &str, entries: &[Education]) {
        let g = &self.geometry;
        c.section_header(title);

        for (i, edu) in entries.iter().enumerate() {
            if i > 0 {
                c.advance(ENTRY_GAP);
            }
            let rows = if edu.coursework.is_empty() { 2.0 } else { 3.0 };
            c.ensure_room(rows * g.line_height);

            c.text(g.left_margin, &edu.degree, g.entry_size, true);
            c.text_right(&edu.graduation_date, g.entry_size, false);
            c.advance(g.line_height);

            let mut school_info = edu.institution.clone();
            if !edu.gpa.is_empty() {
                school_info = format!("{} | GPA: {}", school_info, edu.gpa);
            }
            c.text(g.left_margin, &school_info, g.body_size, false);
            c.advance(g.line_height);

            if !edu.coursework.is_empty() {
                let coursework = format!("Relevant Coursework: {}", edu.coursework.join(", "));
                c.text(g.left_margin, &coursework, g.body_size, false);
                c.advance(g.line_height);
            }
        }
        c.advance(SECTION_GAP);
    }

    fn render_skills(&self, c: &mut Canvas, title: &str, skills: &[Skill]) {
        let g = &self.geometry;
        c.section_header(title);

        for (category, names) in group_by_category(skills) {
            let label = format!("{category}:");
            let value = names.join(", ");
            let wrap_width = g.content_width() - LABEL_INDENT + ENTRY_GAP;
            let lines = wrap(&value, wrap_width, g.body_size);

            c.ensure_room(lines.len() as f32 * g.line_height + 2.0);
            c.text(g.left_margin, &label, g.body_size, true);
            for line in &lines {
                c.ensure_room(g.line_height);
                c.text(g.left_margin + LABEL_INDENT, line, g.body_size, false);
                c.advance(g.line_height);
            }
            c.advance(2.0);
        }
        c.advance(SECTION_GAP);
    }

    fn render_projects(&self, c: &mut Canvas, title: &str, projects: &[Project]) {
        let g = &self.geometry;
        c.section_header(title);

        for (i, project) in projects.iter().enumerate() {
            if i > 0 {
                c.advance(ENTRY_GAP);
            }
            c.ensure_room(g.line_height);
            c.text(g.left_margin, &project.name, g.entry_size, true);
            c.advance(g.line_height);

            if !project.description.is_empty() {
                c.paragraph(&project.description);
            }

            if !project.technologies.is_empty() {
                c.ensure_room(g.line_height);
                c.text(g.left_margin, "Technologies: ", g.body_size, true);
                c.text(
                    g.left_margin + LABEL_INDENT,
                    &project.technologies.join(", "),
                    g.body_size,
                    false,
                );
                c.advance(g.line_height);
            }

            let mut urls = Vec::new();
            if !project.github_url.is_empty() {
                urls.push(format!("GitHub: {}", project.github_url));
            }
            if !project.live_url.is_empty() {
                urls.push(format!("Live: {}", project.live_url));
            }
            if !urls.is_empty() {
                c.ensure_room(g.line_height);
                c.text(g.left_margin, &urls.join(" | "), g.body_size, false);
                c.advance(g.line_height);
            }
        }
        c.advance(SECTION_GAP);
    }

    fn render_certifications(&self, c: &mut Canvas, title: &str, certs: &[Certification]) {
        let g = &self.geometry;
        c.section_header(title);

        for (i, cert) in certs.iter().enumerate() {
            if i > 0 {
                c.advance(CERT_GAP);
            }
            c.ensure_room(2.0 * g.line_height);

            c.text(g.left_margin, &cert.name, g.body_size, true);
            c.text_right(&cert.date, g.body_size, false);
            c.advance(g.line_height);

            c.text(g.left_margin, &cert.issuer, g.body_size, false);
            c.advance(g.line_height);
        }
        c.advance(SECTION_GAP);
    }

    fn render_languages(&self, c: &mut Canvas, title: &str, languages: &[Language]) {
        c.section_header(title);
        let line = languages
            .iter()
            .map(|lang| format!("{} ({})", lang.name, lang.proficiency))
            .collect::<Vec<_>>()
            .join(", ");
        c.paragraph(&line);
        c.advance(SECTION_GAP);
    }

    fn render_custom(&self, c: &mut Canvas, custom: &CustomSection) {
        c.section_header(&custom.title);
        match custom.kind {
            ContentKind::Text => {
                for item in &custom.content {
                    c.paragraph(&item.text);
                }
            }
            ContentKind::List => {
                for item in &custom.content {
                    c.bullet(&item.text);
                }
            }
            ContentKind::Structured => {
                for (i, item) in custom.content.iter().enumerate() {
                    if i > 0 {
                        c.advance(ENTRY_GAP);
                    }
                    c.paragraph(&item.text);
                }
            }
        }
        c.advance(SECTION_GAP);
    }
}

/// Join non-empty segments with the pipe separator used across the layout.
fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Group skills by category, preserving first-seen category order.
fn group_by_category(skills: &[Skill]) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, names)) => names.push(&skill.name),
            None => groups.push((&skill.category, vec![&skill.name])),
        }
    }
    groups
}

/// Accumulates draw ops while threading the cursor through render steps.
struct Canvas<'g> {
    geometry: &'g PageGeometry,
    pages: Vec<LaidPage>,
    cursor: Cursor,
}

impl<'g> Canvas<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![LaidPage::default()],
            cursor: Cursor {
                page: 0,
                y: geometry.top_margin,
            },
        }
    }

    fn ensure_room(&mut self, required: f32) {
        self.cursor = ensure_room(self.geometry, self.cursor, required);
        while self.pages.len() <= self.cursor.page {
            self.pages.push(LaidPage::default());
        }
    }

    fn advance(&mut self, dy: f32) {
        self.cursor.y += dy;
    }

    /// Emit a text op at the cursor baseline. Empty strings draw nothing
    /// but callers still advance, keeping block heights stable.
    fn text(&mut self, x: f32, text: &str, size: f32, bold: bool) {
        if text.is_empty() {
            return;
        }
        let op = DrawOp::Text {
            x,
            y: self.cursor.y,
            size,
            bold,
            text: text.to_string(),
        };
        self.pages[self.cursor.page].ops.push(op);
    }

    /// Right-aligned text: measure, then position against the right edge.
    fn text_right(&mut self, text: &str, size: f32, bold: bool) {
        let x = self.geometry.right_edge - text_width(text, size);
        self.text(x, text, size, bold);
    }

    fn rule(&mut self) {
        let op = DrawOp::Rule {
            x1: self.geometry.left_margin,
            y1: self.cursor.y,
            x2: self.geometry.right_edge,
            y2: self.cursor.y,
            width: 0.5,
        };
        self.pages[self.cursor.page].ops.push(op);
    }

    fn section_header(&mut self, title: &str) {
        self.ensure_room(HEADER_HEIGHT);
        self.text(
            self.geometry.left_margin,
            &title.to_uppercase(),
            self.geometry.header_size,
            true,
        );
        self.advance(8.0);
        self.rule();
        self.advance(8.0);
    }

    fn paragraph(&mut self, text: &str) {
        let g = self.geometry;
        let lines = wrap(text, g.content_width(), g.body_size);
        self.ensure_room(lines.len() as f32 * g.line_height + 5.0);
        for line in &lines {
            // No-op for blocks that fit; flows a taller-than-page block
            // onto continuation pages instead of past the content area.
            self.ensure_room(g.line_height);
            self.text(g.left_margin, line, g.body_size, false);
            self.advance(g.line_height);
        }
        self.advance(2.0);
    }

    fn bullet(&mut self, text: &str) {
        let g = self.geometry;
        let lines = wrap(text, g.content_width() - 5.0, g.body_size);
        self.ensure_room(lines.len() as f32 * g.line_height + 2.0);
        self.text(g.left_margin + 5.0, "\u{2022}", g.body_size, false);
        for line in &lines {
            self.ensure_room(g.line_height);
            self.text(g.left_margin + 10.0, line, g.body_size, false);
            self.advance(g.line_height);
        }
        self.advance(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentItem, Skill, SkillLevel};

    fn engine() -> LayoutEngine {
        LayoutEngine::new(PageGeometry::default())
    }

    fn sample_resume() -> Resume {
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
        resume.summary = "Backend engineer focused on reliability.".to_string();
        resume.experience.push(WorkExperience {
            position: "Senior Engineer".to_string(),
            company: "Acme Corp".to_string(),
            location: "Remote".to_string(),
            start_date: "Jan 2020".to_string(),
            current: true,
            description: vec!["Led a team of 5".to_string()],
            ..WorkExperience::new()
        });
        resume.skills.push(Skill {
            level: Some(SkillLevel::Intermediate),
            ..Skill::new("Python", "Languages")
        });
        resume.skills.push(Skill::new("Go", "Languages"));
        resume.skills.push(Skill::new("Rust", "Languages"));
        resume
    }

    #[test]
    fn test_ensure_room_breaks_only_on_overflow() {
        let g = PageGeometry::default();
        let at = |y| Cursor { page: 0, y };

        // Exactly filling the page is not an overflow
        let c = ensure_room(&g, at(274.0), 6.0);
        assert_eq!(c, at(274.0));

        let c = ensure_room(&g, at(275.0), 6.0);
        assert_eq!(c, Cursor { page: 1, y: 20.0 });
    }

    #[test]
    fn test_empty_resume_renders_one_empty_page() {
        let doc = engine().render(&Resume::new());
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].ops.is_empty());
    }

    #[test]
    fn test_masthead_and_headers_in_order() {
        let doc = engine().render(&sample_resume());
        let text = doc.plain_text();

        let name = text.find("Jane Doe").unwrap();
        let summary = text.find("PROFESSIONAL SUMMARY").unwrap();
        let experience = text.find("WORK EXPERIENCE").unwrap();
        let skills = text.find("SKILLS").unwrap();
        assert!(name < summary && summary < experience && experience < skills);
    }

    #[test]
    fn test_hidden_section_contributes_nothing() {
        let mut resume = sample_resume();
        resume.set_section_visible("skills", false);
        let doc = engine().render(&resume);
        assert!(!doc.plain_text().contains("SKILLS"));
        assert!(!doc.plain_text().contains("Python"));
    }

    #[test]
    fn test_empty_backed_section_emits_no_header() {
        // Summary is visible by default but has no content here
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        let doc = engine().render(&resume);
        assert!(!doc.plain_text().contains("PROFESSIONAL SUMMARY"));
    }

    #[test]
    fn test_order_respected_over_list_position() {
        let mut resume = sample_resume();
        resume.move_section("skills", 1);
        let doc = engine().render(&resume);
        let text = doc.plain_text();
        assert!(text.find("SKILLS").unwrap() < text.find("PROFESSIONAL SUMMARY").unwrap());
    }

    #[test]
    fn test_skill_grouping_round_trip() {
        let doc = engine().render(&sample_resume());
        let labels: Vec<&DrawOp> = doc
            .all_ops()
            .filter(|op| matches!(op, DrawOp::Text { text, .. } if text == "Languages:"))
            .collect();
        assert_eq!(labels.len(), 1);
        assert!(doc.plain_text().contains("Python, Go, Rust"));
    }

    #[test]
    fn test_date_range_right_aligned() {
        let g = PageGeometry::default();
        let doc = engine().render(&sample_resume());
        let (x, text) = doc
            .all_ops()
            .find_map(|op| match op {
                DrawOp::Text { x, size, text, .. }
                    if text.contains("Present") && *size == g.entry_size =>
                {
                    Some((*x, text.clone()))
                }
                _ => None,
            })
            .expect("date range op");
        let right = x + text_width(&text, g.entry_size);
        assert!((right - g.right_edge).abs() < 0.01);
    }

    #[test]
    fn test_current_flag_overrides_end_date() {
        let mut resume = sample_resume();
        resume.experience[0].end_date = "Dec 2024".to_string();
        let doc = engine().render(&resume);
        let text = doc.plain_text();
        assert!(text.contains("Jan 2020 - Present"));
        assert!(!text.contains("Dec 2024"));
    }

    #[test]
    fn test_long_document_paginates_and_resets_to_top_margin() {
        let g = PageGeometry::default();
        let mut resume = sample_resume();
        for i in 0..30 {
            resume.experience.push(WorkExperience {
                position: format!("Engineer {i}"),
                company: format!("Company {i}"),
                start_date: "Jan 2015".to_string(),
                end_date: "Dec 2016".to_string(),
                description: vec![
                    "Built and operated a service handling many requests per day \
                     across several regions with strict latency budgets"
                        .to_string(),
                ],
                ..WorkExperience::new()
            });
        }

        let doc = engine().render(&resume);
        assert!(doc.page_count() > 1);

        for op in doc.all_ops() {
            assert!(op.y() <= g.content_height, "op overflows page: {op:?}");
            assert!(op.y() >= g.top_margin);
        }
        for page in &doc.pages[1..] {
            let first = page.ops.first().expect("continuation page has ops");
            assert_eq!(first.y(), g.top_margin);
        }
    }

    #[test]
    fn test_paragraph_taller_than_page_flows_across_pages() {
        let g = PageGeometry::default();
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        // Wraps to far more lines than fit on one page
        resume.summary = "distributed systems ".repeat(400).trim_end().to_string();

        let doc = engine().render(&resume);
        assert!(doc.page_count() > 1);
        for op in doc.all_ops() {
            assert!(op.y() <= g.content_height, "op overflows page: {op:?}");
        }
        for page in &doc.pages[1..] {
            assert_eq!(page.ops.first().expect("ops").y(), g.top_margin);
        }
    }

    #[test]
    fn test_oversized_bullet_stays_in_content_area() {
        let g = PageGeometry::default();
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.experience.push(WorkExperience {
            position: "Senior Engineer".to_string(),
            description: vec!["wrapped achievement text ".repeat(300)],
            ..WorkExperience::new()
        });

        let doc = engine().render(&resume);
        assert!(doc.page_count() > 1);
        for op in doc.all_ops() {
            assert!(op.y() <= g.content_height);
        }
    }

    #[test]
    fn test_custom_section_kinds() {
        let mut resume = Resume::new();
        let list_id = resume.add_custom_section("Awards", ContentKind::List);
        resume
            .custom_sections
            .iter_mut()
            .find(|cs| cs.id == list_id)
            .unwrap()
            .content
            .push(ContentItem::new("Employee of the month"));

        let structured_id = resume.add_custom_section("Publications", ContentKind::Structured);
        {
            let cs = resume
                .custom_sections
                .iter_mut()
                .find(|cs| cs.id == structured_id)
                .unwrap();
            cs.content.push(ContentItem::new("Paper one"));
            cs.content.push(ContentItem::new("Paper two"));
        }

        let doc = engine().render(&resume);
        let text = doc.plain_text();
        assert!(text.contains("AWARDS"));
        assert!(text.contains("\u{2022}"));
        assert!(text.contains("Employee of the month"));
        assert!(text.contains("PUBLICATIONS"));
        assert!(text.contains("Paper two"));
    }

    #[test]
    fn test_empty_custom_section_skipped() {
        let mut resume = Resume::new();
        resume.add_custom_section("Empty", ContentKind::Text);
        let doc = engine().render(&resume);
        assert!(!doc.plain_text().contains("EMPTY"));
    }
}
