//! Employment history parsing.

use crate::model::{new_id, WorkExperience};

use super::keywords::looks_like_job_title;
use super::patterns::Patterns;

/// Entry-accumulation state while walking the section body.
enum State {
    Seeking,
    Open(WorkExperience),
}

impl State {
    fn flush_into(self, out: &mut Vec<WorkExperience>) {
        if let State::Open(entry) = self {
            out.push(entry);
        }
    }
}

/// Parse the experience section body into employment entries.
///
/// A job-title line opens a new entry (flushing the previous one); a
/// pipe-separated line with a date token fills company, location, and the
/// date range of the open entry; bullet lines become achievement bullets.
/// Anything else is ignored.
pub fn parse(patterns: &Patterns, body: &[String]) -> Vec<WorkExperience> {
    let mut entries = Vec::new();
    let mut state = State::Seeking;

    for line in body {
        if looks_like_job_title(line) {
            let opened = State::Open(WorkExperience {
                id: new_id(),
                position: line.clone(),
                ..Default::default()
            });
            std::mem::replace(&mut state, opened).flush_into(&mut entries);
            continue;
        }

        let State::Open(ref mut entry) = state else {
            continue;
        };

        if looks_like_company_info(patterns, line) {
            fill_company_info(patterns, entry, line);
        } else if line.starts_with('\u{2022}') || line.starts_with('-') {
            entry.description.push(patterns.strip_bullet(line).to_string());
        }
    }

    state.flush_into(&mut entries);
    entries
}

/// Company/meta line: pipe-separated with either a year token of this
/// century or an explicit Present/Current marker.
fn looks_like_company_info(patterns: &Patterns, line: &str) -> bool {
    line.contains('|')
        && (patterns.year_token.is_match(line)
            || line.contains("Present")
            || line.contains("Current"))
}

fn fill_company_info(patterns: &Patterns, entry: &mut WorkExperience, line: &str) {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < 2 {
        return;
    }

    entry.company = parts[0].to_string();

    if let Some(caps) = patterns.date_range.captures(parts[parts.len() - 1]) {
        entry.start_date = caps[1].to_string();
        entry.end_date = caps[2].to_string();
        entry.current = caps[2].to_lowercase().contains("present");
    }

    if parts.len() >= 3 {
        entry.location = parts[1].to_string();
    }
}
