//! Cell-grid geometry used by termenu surfaces and widgets.
//!
//! All coordinates are unsigned terminal cells with the origin at the top
//! left. `x` is the column and `y` is the row.

/// Error types for geometry operations.
mod error;
/// Width/height size type.
mod expanse;
/// Border decomposition of a rectangle.
mod frame;
/// Single-row spans.
mod line;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use error::{Error, Result};
pub use expanse::Expanse;
pub use frame::Frame;
pub use line::Line;
pub use point::Point;
pub use rect::Rect;
