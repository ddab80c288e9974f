use super::{Expanse, Frame, Point};
use crate::{Error, Result};

/// A rectangle of cells.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The empty rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.tl.x + self.w && p.y >= self.tl.y && p.y < self.tl.y + self.h
    }

    /// Does this rectangle completely enclose the other? Empty rectangles are
    /// enclosed when their origin is.
    pub fn contains_rect(&self, other: &Self) -> bool {
        if other.is_empty() {
            return self.contains_point(other.tl);
        }
        self.contains_point(other.tl)
            && self.contains_point(Point {
                x: other.tl.x + other.w - 1,
                y: other.tl.y + other.h - 1,
            })
    }

    /// The overlap of two rectangles, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x1 < x2 && y1 < y2 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// The smallest rectangle that encloses both.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x1 = self.tl.x.min(other.tl.x);
        let y1 = self.tl.y.min(other.tl.y);
        let x2 = (self.tl.x + self.w).max(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).max(other.tl.y + other.h);
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Shift the rectangle without changing its size, saturating at zero.
    pub fn shift(&self, x: i32, y: i32) -> Self {
        Self {
            tl: self.tl.scroll(x, y),
            w: self.w,
            h: self.h,
        }
    }

    /// A rectangle of size `e`, centered inside this one. Fails if it does not
    /// fit.
    pub fn center(&self, e: Expanse) -> Result<Self> {
        if !self.expanse().contains(&e) {
            return Err(Error::Geometry(format!(
                "{}x{} does not fit in {}x{}",
                e.w, e.h, self.w, self.h
            )));
        }
        Ok(Self::new(
            self.tl.x + (self.w - e.w) / 2,
            self.tl.y + (self.h - e.h) / 2,
            e.w,
            e.h,
        ))
    }

    /// The frame of this rectangle for a given border width.
    pub fn frame(&self, border: u32) -> Frame {
        Frame::new(*self, border)
    }

    /// The area inside a border of the given width.
    pub fn inner(&self, border: u32) -> Self {
        Frame::new(*self, border).inner()
    }
}
