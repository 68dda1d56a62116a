//! Page geometry configuration.

use serde::{Deserialize, Serialize};

/// Fixed geometry the layout engine folds a resume into.
///
/// Units are millimeters on an A4 page with the origin at the top-left;
/// font sizes are points. The defaults are load-bearing: existing exported
/// documents were produced with exactly these values, so changing them
/// changes wrap widths and page-break positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    /// Vertical position after which a page break is forced.
    pub content_height: f32,
    /// Left edge of all flowed content.
    pub left_margin: f32,
    /// Right edge used for wrap width and right-aligned fields.
    pub right_edge: f32,
    /// Cursor position at the top of every page.
    pub top_margin: f32,
    /// Vertical advance of one body line.
    pub line_height: f32,
    /// Font size of the name line.
    pub name_size: f32,
    /// Font size of section headers.
    pub header_size: f32,
    /// Font size of entry title lines (position, degree, project name).
    pub entry_size: f32,
    /// Font size of body text.
    pub body_size: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            content_height: 280.0,
            left_margin: 20.0,
            right_edge: 190.0,
            top_margin: 20.0,
            line_height: 6.0,
            name_size: 24.0,
            header_size: 14.0,
            entry_size: 12.0,
            body_size: 10.0,
        }
    }
}

impl PageGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width available to flowed paragraphs.
    pub fn content_width(&self) -> f32 {
        self.right_edge - self.left_margin
    }

    pub fn with_content_height(mut self, height: f32) -> Self {
        self.content_height = height;
        self
    }

    pub fn with_margins(mut self, left: f32, right_edge: f32, top: f32) -> Self {
        self.left_margin = left;
        self.right_edge = right_edge;
        self.top_margin = top;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}
