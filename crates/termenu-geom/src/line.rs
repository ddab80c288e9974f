use super::{Point, Rect};

/// A horizontal run of cells one row high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Line {
    /// Leftmost cell.
    pub tl: Point,
    /// Length in columns.
    pub w: u32,
}

impl Line {
    /// Construct a line starting at column `x` of row `y`.
    pub fn new(x: u32, y: u32, w: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
        }
    }

    /// The line as a one-row rectangle.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: self.tl,
            w: self.w,
            h: 1,
        }
    }
}
