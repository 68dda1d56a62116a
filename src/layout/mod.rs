//! Paginated layout: measurement, draw operations, and the engine that
//! folds a resume into pages.

mod engine;
mod geometry;
mod measure;
mod ops;

pub use engine::{ensure_room, Cursor, LayoutEngine};
pub use geometry::PageGeometry;
pub use measure::{text_width, wrap};
pub use ops::{DrawOp, LaidPage, PaginatedDocument};
