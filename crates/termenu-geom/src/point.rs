/// A cell location.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Point {
    /// The origin.
    pub fn zero() -> Self {
        (0, 0).into()
    }

    /// Shift the point by an offset, avoiding under- or overflow.
    pub fn scroll(&self, x: i32, y: i32) -> Self {
        let nx = if x < 0 {
            self.x.saturating_sub(x.unsigned_abs())
        } else {
            self.x.saturating_add(x.unsigned_abs())
        };
        let ny = if y < 0 {
            self.y.saturating_sub(y.unsigned_abs())
        } else {
            self.y.saturating_add(y.unsigned_abs())
        };
        (nx, ny).into()
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        assert_eq!(Point::from((2, 3)), Point { x: 2, y: 3 });
        assert_eq!(Point::zero(), Point::default());
    }

    #[test]
    fn scroll_saturates() {
        let p = Point { x: 1, y: 1 };
        assert_eq!(p.scroll(-5, 2), Point { x: 0, y: 3 });
        assert_eq!(
            Point { x: u32::MAX, y: 0 }.scroll(1, -1),
            Point { x: u32::MAX, y: 0 }
        );
    }
}
