//! Text measurement and word wrapping.
//!
//! Widths come from the standard Helvetica AFM advance table rather than a
//! fixed column grid: proportional glyphs make character-count columns
//! misalign, and right-aligned fields in particular need real widths.

/// Helvetica advance widths for ASCII 0x20..=0x7E, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Fallback advance for glyphs outside the ASCII table.
const DEFAULT_ADVANCE: u16 = 556;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width of `text` at `size` points, in page units (mm).
pub fn text_width(text: &str, size: f32) -> f32 {
    let advance: u32 = text
        .chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E => u32::from(HELVETICA_WIDTHS[(u32::from(c) - 0x20) as usize]),
            _ => u32::from(DEFAULT_ADVANCE),
        })
        .sum();
    advance as f32 / 1000.0 * size * MM_PER_PT
}

/// Greedy word wrap of `text` to `max_width` page units at `size` points.
///
/// A word wider than the whole line is emitted on its own line unsplit;
/// downstream rendering tolerates the overhang. Empty input yields a single
/// empty line so callers can size blocks uniformly.
pub fn wrap(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
