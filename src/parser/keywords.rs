//! Keyword tables and line-classification predicates.
//!
//! Every "does this line look like X" decision in the heuristic parser goes
//! through a named table and a pure predicate here, so the classification
//! rules stay visible in one place instead of scattered across conditionals.

/// Header keywords per section category.
pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "profile", "objective", "about"];
pub const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work", "employment", "career"];
pub const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "degree"];
pub const SKILLS_KEYWORDS: &[&str] = &["skills", "technical", "technologies", "competencies"];
pub const PROJECT_KEYWORDS: &[&str] = &["projects"];
pub const CERTIFICATION_KEYWORDS: &[&str] = &["certifications", "certificates", "credentials"];
pub const LANGUAGE_KEYWORDS: &[&str] = &["languages", "language"];

/// Words that mark a line as the start of a new employment entry.
pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "specialist",
    "coordinator",
    "director",
    "lead",
    "senior",
    "junior",
    "intern",
    "consultant",
    "architect",
];

/// Words that mark a line as the start of a new education entry.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "diploma",
    "certificate",
    "engineering",
    "science",
    "arts",
    "business",
];

/// Words that mark a line as naming an educational institution.
pub const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school", "academy"];

/// Length caps for entry-start classification.
const JOB_TITLE_MAX_LEN: usize = 100;
const DEGREE_MAX_LEN: usize = 150;

/// Length cap for shout-case generic headers.
const GENERIC_HEADER_MAX_LEN: usize = 30;
const GENERIC_HEADER_MIN_LEN: usize = 3;

/// Section categories the parser can segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Summary,
        Category::Experience,
        Category::Education,
        Category::Skills,
        Category::Projects,
        Category::Certifications,
        Category::Languages,
    ];

    /// Keywords that identify this category's header line.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Summary => SUMMARY_KEYWORDS,
            Category::Experience => EXPERIENCE_KEYWORDS,
            Category::Education => EDUCATION_KEYWORDS,
            Category::Skills => SKILLS_KEYWORDS,
            Category::Projects => PROJECT_KEYWORDS,
            Category::Certifications => CERTIFICATION_KEYWORDS,
            Category::Languages => LANGUAGE_KEYWORDS,
        }
    }

    /// Maximum header line length for this category. Skills headers run
    /// longer in the wild ("Technical Skills & Competencies"), so they get
    /// a looser cap.
    pub fn header_cap(self) -> usize {
        match self {
            Category::Skills => 50,
            _ => 30,
        }
    }
}

fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Is this line the header of the given section category?
pub fn is_section_header(line: &str, category: Category) -> bool {
    line.len() < category.header_cap() && contains_keyword(line, category.keywords())
}

/// Is this line the header of any category other than the given one?
pub fn is_other_section_header(line: &str, current: Category) -> bool {
    Category::ALL
        .iter()
        .any(|&cat| cat != current && is_section_header(line, cat))
}

/// Shout-case sentinel: a short line equal to its own uppercase form is
/// treated as the header of whatever section comes next, even when it
/// matches no keyword table.
pub fn is_generic_header(line: &str) -> bool {
    line.len() < GENERIC_HEADER_MAX_LEN
        && line.len() > GENERIC_HEADER_MIN_LEN
        && line == line.to_uppercase()
}

/// New employment entry: mentions a job-title word and is short enough to
/// be a title rather than a sentence.
pub fn looks_like_job_title(line: &str) -> bool {
    line.len() < JOB_TITLE_MAX_LEN && contains_keyword(line, JOB_TITLE_KEYWORDS)
}

/// New education entry.
pub fn looks_like_degree(line: &str) -> bool {
    line.len() < DEGREE_MAX_LEN && contains_keyword(line, DEGREE_KEYWORDS)
}

/// Line naming an educational institution.
pub fn mentions_institution(line: &str) -> bool {
    contains_keyword(line, INSTITUTION_KEYWORDS)
}
