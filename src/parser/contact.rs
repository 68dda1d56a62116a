//! Name and contact-field extraction.
//!
//! Contact fields are scanned independently over the full normalized text
//! rather than line by line: PDF extraction frequently glues contact info
//! onto neighboring content, so line-scoped matching would miss them. First
//! match of each pattern wins; there is no scoring across candidates.

use crate::model::PersonalInfo;

use super::patterns::Patterns;

/// Extract the contact block from the line sequence and its joined text.
pub fn extract(patterns: &Patterns, text: &str, lines: &[String]) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(name) = find_name(lines) {
        info.full_name = name.to_string();
    }
    if let Some(m) = patterns.email.find(text) {
        info.email = m.as_str().to_string();
    }
    if let Some(m) = patterns.phone.find(text) {
        info.phone = m.as_str().to_string();
    }
    if let Some(m) = patterns.linkedin.find(text) {
        info.linkedin = m.as_str().to_string();
    }
    if let Some(m) = patterns.github.find(text) {
        info.github = m.as_str().to_string();
    }
    if let Some(location) = find_location(patterns, text) {
        info.location = location;
    }

    info
}

/// The candidate name is the first line that is short, made only of letters
/// and spaces, has at least two words, and carries no contact markers.
pub fn find_name(lines: &[String]) -> Option<&str> {
    lines
        .iter()
        .map(String::as_str)
        .find(|line| is_name_candidate(line))
}

fn is_name_candidate(line: &str) -> bool {
    line.len() > 2
        && line.len() < 50
        && !line.contains('@')
        && !line.contains("http")
        && line.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
        && line.split(' ').count() >= 2
}

/// Two ordered attempts: "City, State, Country" first, then "City, State".
/// A match containing contact markers is rejected outright rather than
/// retried, mirroring the first-match-wins policy of the other scans.
fn find_location(patterns: &Patterns, text: &str) -> Option<String> {
    for pattern in [&patterns.location_three_part, &patterns.location_two_part] {
        if let Some(m) = pattern.find(text) {
            let location = m.as_str();
            if !location.contains('@') && !location.contains("http") {
                return Some(location.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_name_first_match_wins() {
        let lines = lines(&[
            "RESUME",
            "jane@example.com",
            "Jane Doe",
            "John Smith",
        ]);
        assert_eq!(find_name(&lines), Some("Jane Doe"));
    }

    #[test]
    fn test_name_rejects_single_token_and_urls() {
        assert!(find_name(&lines(&["Jane"])).is_none());
        assert!(find_name(&lines(&["http somewhere else"])).is_none());
        assert!(find_name(&lines(&["Jane Doe II (she)"])).is_none());
    }

    #[test]
    fn test_extract_contact_fields() {
        let patterns = Patterns::new();
        let line_vec = lines(&["Jane Doe"]);
        let text = "Jane Doe jane.doe@example.com (555) 123-4567 \
                    linkedin.com/in/janedoe github.com/janedoe";
        let info = extract(&patterns, text, &line_vec);

        assert_eq!(info.full_name, "Jane Doe");
        assert_eq!(info.email, "jane.doe@example.com");
        assert_eq!(info.phone, "(555) 123-4567");
        assert_eq!(info.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(info.github, "github.com/janedoe");
    }

    #[test]
    fn test_extract_missing_fields_stay_empty() {
        let patterns = Patterns::new();
        let info = extract(&patterns, "nothing useful here", &[]);
        assert_eq!(info, PersonalInfo::default());
    }
}
