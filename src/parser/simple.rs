//! Single-pass parsers for the flat sections: summary, skills,
//! certifications, and languages.

use crate::model::{new_id, Certification, Language, LanguageProficiency, Skill, SkillLevel};

use super::patterns::Patterns;

/// Summary is the section body joined back into one paragraph.
pub fn summary(body: &[String]) -> String {
    body.join(" ").trim().to_string()
}

/// Skills lines look like "Category: name, name; name". Lines without a
/// colon are ignored. Imported skills default to Intermediate since source
/// documents rarely state a level.
pub fn skills(body: &[String]) -> Vec<Skill> {
    let mut out = Vec::new();

    for line in body {
        let Some((category, names)) = line.split_once(':') else {
            continue;
        };
        let category = category.trim();
        for name in names.split([',', ';']) {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            out.push(Skill {
                id: new_id(),
                name: name.to_string(),
                category: category.to_string(),
                level: Some(SkillLevel::Intermediate),
            });
        }
    }

    out
}

/// Certifications are bullet lines of the form "name | issuer | date".
pub fn certifications(patterns: &Patterns, body: &[String]) -> Vec<Certification> {
    let mut out = Vec::new();

    for line in body {
        if !line.starts_with('\u{2022}') && !line.starts_with('-') {
            continue;
        }
        let parts: Vec<&str> = patterns
            .strip_bullet(line)
            .split('|')
            .map(str::trim)
            .collect();
        if parts.len() < 2 {
            continue;
        }
        out.push(Certification {
            id: new_id(),
            name: parts[0].to_string(),
            issuer: parts[1].to_string(),
            date: parts.get(2).unwrap_or(&"").to_string(),
            ..Default::default()
        });
    }

    out
}

/// Languages are bullet lines of the form "name (proficiency)".
pub fn languages(patterns: &Patterns, body: &[String]) -> Vec<Language> {
    let mut out = Vec::new();

    for line in body {
        if !line.starts_with('\u{2022}') && !line.starts_with('-') {
            continue;
        }
        let stripped = patterns.strip_bullet(line);
        if let Some(caps) = patterns.language_entry.captures(stripped) {
            out.push(Language {
                id: new_id(),
                name: caps[1].trim().to_string(),
                proficiency: map_proficiency(caps[2].trim()),
            });
        }
    }

    out
}

/// Map free-form proficiency text onto the closed set by substring, in
/// precedence order. Unknown wording degrades to Basic.
fn map_proficiency(text: &str) -> LanguageProficiency {
    let lower = text.to_lowercase();
    if lower.contains("native") || lower.contains("mother") {
        LanguageProficiency::Native
    } else if lower.contains("fluent") || lower.contains("advanced") {
        LanguageProficiency::Fluent
    } else if lower.contains("professional") || lower.contains("business") {
        LanguageProficiency::Professional
    } else if lower.contains("conversational") || lower.contains("intermediate") {
        LanguageProficiency::Conversational
    } else {
        LanguageProficiency::Basic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_summary_joins_lines() {
        let body = lines(&["Engineer with ten years", "of distributed systems work."]);
        assert_eq!(
            summary(&body),
            "Engineer with ten years of distributed systems work."
        );
        assert_eq!(summary(&[]), "");
    }

    #[test]
    fn test_skills_colon_lines() {
        let body = lines(&[
            "Languages: Python, Go, Rust",
            "no colon on this line",
            "Tools: Docker; Kubernetes",
        ]);
        let skills = skills(&body);

        assert_eq!(skills.len(), 5);
        assert!(skills[..3].iter().all(|s| s.category == "Languages"));
        assert_eq!(skills[0].name, "Python");
        assert_eq!(skills[2].name, "Rust");
        assert_eq!(skills[4].name, "Kubernetes");
        assert_eq!(skills[4].level, Some(SkillLevel::Intermediate));
    }

    #[test]
    fn test_certifications_pipe_split() {
        let patterns = Patterns::new();
        let body = lines(&[
            "\u{2022} AWS Solutions Architect | Amazon | 2023",
            "\u{2022} CKA | CNCF",
            "not a bullet line | ignored | 2020",
            "\u{2022} missing issuer",
        ]);
        let certs = certifications(&patterns, &body);

        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name, "AWS Solutions Architect");
        assert_eq!(certs[0].issuer, "Amazon");
        assert_eq!(certs[0].date, "2023");
        assert_eq!(certs[1].date, "");
    }

    #[test]
    fn test_languages_bullets() {
        let patterns = Patterns::new();
        let body = lines(&[
            "\u{2022} Spanish (Native speaker)",
            "- German (business working level)",
            "English without parens",
        ]);
        let langs = languages(&patterns, &body);

        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].name, "Spanish");
        assert_eq!(langs[0].proficiency, LanguageProficiency::Native);
        assert_eq!(langs[1].proficiency, LanguageProficiency::Professional);
    }

    #[test]
    fn test_proficiency_precedence() {
        assert_eq!(map_proficiency("Fluent"), LanguageProficiency::Fluent);
        assert_eq!(map_proficiency("ADVANCED"), LanguageProficiency::Fluent);
        assert_eq!(
            map_proficiency("intermediate"),
            LanguageProficiency::Conversational
        );
        assert_eq!(map_proficiency("some words"), LanguageProficiency::Basic);
    }
}
