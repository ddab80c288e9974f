use super::{Point, Rect};

/// A size with no location: the dimensions of a screen or a window.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse from a width and height.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Number of cells covered.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// A `Rect` of this size anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this expanse can completely enclose `other`.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
