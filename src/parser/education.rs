//! Education history parsing.

use crate::model::{new_id, Education};

use super::keywords::{looks_like_degree, mentions_institution};
use super::patterns::Patterns;

enum State {
    Seeking,
    Open(Education),
}

impl State {
    fn flush_into(self, out: &mut Vec<Education>) {
        if let State::Open(entry) = self {
            out.push(entry);
        }
    }
}

/// Parse the education section body into entries.
///
/// A degree-keyword line opens a new entry; an institution line (either a
/// known institution word, or a pipe plus a year token) fills institution
/// and graduation date on the open entry.
pub fn parse(patterns: &Patterns, body: &[String]) -> Vec<Education> {
    let mut entries = Vec::new();
    let mut state = State::Seeking;

    for line in body {
        if looks_like_degree(line) {
            let opened = State::Open(Education {
                id: new_id(),
                degree: line.clone(),
                ..Default::default()
            });
            std::mem::replace(&mut state, opened).flush_into(&mut entries);
            continue;
        }

        let State::Open(ref mut entry) = state else {
            continue;
        };

        if looks_like_institution(patterns, line) {
            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            entry.institution = parts[0].to_string();
            if parts.len() > 1 {
                if let Some(m) = patterns.four_digit_year.find(parts[parts.len() - 1]) {
                    entry.graduation_date = m.as_str().to_string();
                }
            }
        }
    }

    state.flush_into(&mut entries);
    entries
}

fn looks_like_institution(patterns: &Patterns, line: &str) -> bool {
    mentions_institution(line) || (line.contains('|') && patterns.year_token.is_match(line))
}
