//! Section segmentation.
//!
//! Each category is located independently: find its header line, then take
//! every following line until the next line that reads as some other
//! section's header (or as a shout-case generic header). A missing header
//! simply yields an empty body; a malformed section never blocks the others.

use super::keywords::{is_generic_header, is_other_section_header, is_section_header, Category};

/// Lines the summary body may span when no terminating header is found.
const SUMMARY_FALLBACK_LINES: usize = 4;

/// Lines scanned after the languages header, independent of terminators.
const LANGUAGES_WINDOW: usize = 9;

/// Slice out the body of a section category. Empty when no header matches.
pub fn body_slice<'a>(lines: &'a [String], category: Category) -> &'a [String] {
    let Some(header) = lines
        .iter()
        .position(|line| is_section_header(line, category))
    else {
        return &[];
    };

    let start = header + 1;
    match category {
        // Fixed window: language lists are short and their bodies often
        // contain country names that read like section keywords.
        Category::Languages => &lines[start..lines.len().min(start + LANGUAGES_WINDOW)],
        _ => {
            let end = find_terminator(lines, header, category).unwrap_or_else(|| match category {
                Category::Summary => lines.len().min(start + SUMMARY_FALLBACK_LINES),
                _ => lines.len(),
            });
            &lines[start..end]
        }
    }
}

/// Find the first line after the header's immediate successor that reads as
/// the start of a different section. The first body line is never treated
/// as a terminator, so a section whose body opens with a keyword-bearing
/// line still gets a chance to parse.
fn find_terminator(lines: &[String], header: usize, category: Category) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(header + 2)
        .find(|(_, line)| is_other_section_header(line, category) || is_generic_header(line))
        .map(|(idx, _)| idx)
}
