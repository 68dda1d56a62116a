//! Paginated draw operations.
//!
//! The layout engine's output: an ordered list of pages, each an ordered
//! list of positioned text and rule instructions. The consuming backend
//! (the PDF writer, a preview, a test) decides what to do with them.

use serde::{Deserialize, Serialize};

use super::PageGeometry;

/// One positioned drawing instruction. Coordinates are page units (mm) with
/// the origin at the top-left; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    /// A run of text at a position.
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: String,
    },
    /// A horizontal rule (section header underline).
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
}

impl DrawOp {
    /// Top coordinate of the op, for overflow checks.
    pub fn y(&self) -> f32 {
        match self {
            DrawOp::Text { y, .. } => *y,
            DrawOp::Rule { y1, .. } => *y1,
        }
    }
}

/// One output page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaidPage {
    pub ops: Vec<DrawOp>,
}

impl LaidPage {
    /// Concatenated text content, in draw order. Test and preview helper.
    pub fn plain_text(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Rule { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A fully laid-out document: the geometry it was produced with plus its
/// ordered pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<LaidPage>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All ops across all pages, in render order.
    pub fn all_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flat_map(|p| p.ops.iter())
    }

    /// Concatenated text content of the whole document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(LaidPage::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_skips_rules() {
        let page = LaidPage {
            ops: vec![
                DrawOp::Text {
                    x: 20.0,
                    y: 20.0,
                    size: 14.0,
                    bold: true,
                    text: "SKILLS".to_string(),
                },
                DrawOp::Rule {
                    x1: 20.0,
                    y1: 28.0,
                    x2: 190.0,
                    y2: 28.0,
                    width: 0.5,
                },
            ],
        };
        assert_eq!(page.plain_text(), "SKILLS");
    }

    #[test]
    fn test_draw_op_serde_tag() {
        let op = DrawOp::Rule {
            x1: 0.0,
            y1: 1.0,
            x2: 2.0,
            y2: 1.0,
            width: 0.5,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains("\"op\":\"rule\""));
    }
}
