//! Compiled regex patterns shared by the field extractors.

use regex::Regex;

/// All regexes the parser needs, compiled once per parser instance.
pub struct Patterns {
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
    /// "City, State, Country"
    pub location_three_part: Regex,
    /// "City, State" or "City, Country"
    pub location_two_part: Regex,
    /// `<Month Year> - <Month Year | Present>`
    pub date_range: Regex,
    /// A year token in this century, e.g. "2021"
    pub year_token: Regex,
    /// Any 4-digit run with word boundaries
    pub four_digit_year: Regex,
    /// Leading bullet glyph with trailing whitespace
    pub bullet_prefix: Regex,
    /// `<name> (<proficiency>)`
    pub language_entry: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
            phone: Regex::new(r"(\+?\d{1,4}[\s-]?)?\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{4}").unwrap(),
            linkedin: Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[a-zA-Z0-9-]+")
                .unwrap(),
            github: Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[a-zA-Z0-9-]+").unwrap(),
            location_three_part: Regex::new(r"[A-Za-z\s]+,\s*[A-Za-z\s]+,\s*[A-Za-z\s]+").unwrap(),
            location_two_part: Regex::new(r"[A-Za-z\s]+,\s*[A-Za-z\s]+").unwrap(),
            date_range: Regex::new(r"(\w+\s+\d{4})\s*[-\u{2013}]\s*(\w+\s+\d{4}|(?i:present))")
                .unwrap(),
            year_token: Regex::new(r"\b20\d{2}\b").unwrap(),
            four_digit_year: Regex::new(r"\b\d{4}\b").unwrap(),
            bullet_prefix: Regex::new(r"^[\u{2022}-]\s*").unwrap(),
            language_entry: Regex::new(r"([A-Za-z\s]+)\s*\(([^)]+)\)").unwrap(),
        }
    }

    /// Strip a leading bullet glyph from a line.
    pub fn strip_bullet<'a>(&self, line: &'a str) -> &'a str {
        match self.bullet_prefix.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}
