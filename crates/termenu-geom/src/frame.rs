use super::Rect;

/// The border cells of a rectangle, split into sides and corners.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Frame {
    /// The top edge, not including corners.
    pub top: Rect,
    /// The bottom edge, not including corners.
    pub bottom: Rect,
    /// The left edge, not including corners.
    pub left: Rect,
    /// The right edge, not including corners.
    pub right: Rect,
    /// The top left corner.
    pub topleft: Rect,
    /// The top right corner.
    pub topright: Rect,
    /// The bottom left corner.
    pub bottomleft: Rect,
    /// The bottom right corner.
    pub bottomright: Rect,
    /// The rect the frame was cut from.
    outer: Rect,
    /// Border width.
    border: u32,
}

impl Frame {
    /// Cut a frame of width `border` from `rect`. A rect too small to hold
    /// the border yields an empty frame with no inner area.
    pub fn new(rect: Rect, border: u32) -> Self {
        if rect.w <= border * 2 || rect.h <= border * 2 {
            return Self {
                outer: rect,
                border,
                ..Self::default()
            };
        }
        let (x, y, w, h) = (rect.tl.x, rect.tl.y, rect.w, rect.h);
        Self {
            top: Rect::new(x + border, y, w - 2 * border, border),
            bottom: Rect::new(x + border, y + h - border, w - 2 * border, border),
            left: Rect::new(x, y + border, border, h - 2 * border),
            right: Rect::new(x + w - border, y + border, border, h - 2 * border),
            topleft: Rect::new(x, y, border, border),
            topright: Rect::new(x + w - border, y, border, border),
            bottomleft: Rect::new(x, y + h - border, border, border),
            bottomright: Rect::new(x + w - border, y + h - border, border, border),
            outer: rect,
            border,
        }
    }

    /// The space enclosed by the frame.
    pub fn inner(&self) -> Rect {
        if self.outer.w <= self.border * 2 || self.outer.h <= self.border * 2 {
            Rect::zero()
        } else {
            Rect::new(
                self.outer.tl.x + self.border,
                self.outer.tl.y + self.border,
                self.outer.w - 2 * self.border,
                self.outer.h - 2 * self.border,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides() {
        let f = Frame::new(Rect::new(10, 10, 10, 10), 1);
        assert_eq!(f.top, Rect::new(11, 10, 8, 1));
        assert_eq!(f.bottom, Rect::new(11, 19, 8, 1));
        assert_eq!(f.left, Rect::new(10, 11, 1, 8));
        assert_eq!(f.right, Rect::new(19, 11, 1, 8));
        assert_eq!(f.bottomright, Rect::new(19, 19, 1, 1));
        assert_eq!(f.inner(), Rect::new(11, 11, 8, 8));
    }

    #[test]
    fn too_small() {
        let f = Frame::new(Rect::new(0, 0, 2, 5), 1);
        assert_eq!(f.inner(), Rect::zero());
        assert_eq!(f.top, Rect::zero());
    }
}
