use crate::{
    error::Result,
    geom::{Expanse, Frame, Line, Point, Rect},
    render::RenderBackend,
    style::Style,
    widgets::frame::FrameGlyphs,
};

/// A terminal cell with glyph and style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Glyph.
    pub ch: char,
    /// Style applied to the cell.
    pub style: Style,
}

/// A 2D grid of styled cells. The screen composes into one of these and
/// surfaces save what they cover into smaller ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermBuf {
    /// Buffer size in cells.
    size: Expanse,
    /// Backing cell storage, row-major.
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Construct a buffer filled with the given character and style.
    pub fn new(size: impl Into<Expanse>, ch: char, style: Style) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell { ch, style }; size.area() as usize],
        }
    }

    /// Return the buffer size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Return the buffer bounds as a rectangle.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// Convert a point into a cell index.
    fn idx(&self, p: Point) -> Option<usize> {
        if self.rect().contains_point(p) {
            Some(p.y as usize * self.size.w as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Write a cell at a specific point. Out of bounds writes are dropped.
    pub fn put(&mut self, p: Point, ch: char, style: Style) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Get a cell by position.
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Fill a rectangle with a glyph and style.
    pub fn fill(&mut self, style: &Style, r: Rect, ch: char) {
        if let Some(isec) = self.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put(Point { x, y }, ch, *style);
                }
            }
        }
    }

    /// Draw a box outline using a glyph set.
    pub fn frame(&mut self, style: &Style, f: Frame, g: &FrameGlyphs) {
        self.fill(style, f.top, g.horizontal);
        self.fill(style, f.bottom, g.horizontal);
        self.fill(style, f.left, g.vertical);
        self.fill(style, f.right, g.vertical);
        self.fill(style, f.topleft, g.topleft);
        self.fill(style, f.topright, g.topright);
        self.fill(style, f.bottomleft, g.bottomleft);
        self.fill(style, f.bottomright, g.bottomright);
    }

    /// Draw text clipped to the given line, padding the rest of the line with
    /// spaces.
    pub fn text(&mut self, style: &Style, l: Line, txt: &str) {
        let Some(isec) = self.rect().intersect(&l.rect()) else {
            return;
        };
        let skip = (isec.tl.x - l.tl.x) as usize;
        let mut chars = txt.chars().skip(skip);
        for x in isec.tl.x..isec.tl.x + isec.w {
            let ch = chars.next().unwrap_or(' ');
            self.put(Point { x, y: isec.tl.y }, ch, *style);
        }
    }

    /// Draw text starting at a point, clipped at the right edge of the
    /// buffer. Cells past the end of the text are left untouched.
    pub fn print(&mut self, style: &Style, p: Point, txt: &str) {
        for (i, ch) in txt.chars().enumerate() {
            let x = p.x + i as u32;
            if x >= self.size.w {
                break;
            }
            self.put(Point { x, y: p.y }, ch, *style);
        }
    }

    /// Copy a region out into a new buffer. The region is clipped to our
    /// bounds.
    pub fn extract(&self, r: Rect) -> Self {
        let Some(isec) = self.rect().intersect(&r) else {
            return Self {
                size: Expanse::default(),
                cells: vec![],
            };
        };
        let mut cells = Vec::with_capacity(isec.expanse().area() as usize);
        for y in isec.tl.y..isec.tl.y + isec.h {
            let start = y as usize * self.size.w as usize + isec.tl.x as usize;
            cells.extend_from_slice(&self.cells[start..start + isec.w as usize]);
        }
        Self {
            size: isec.expanse(),
            cells,
        }
    }

    /// Copy all of `src` into this buffer with its top-left corner at `at`,
    /// clipping anything that falls outside.
    pub fn blit(&mut self, src: &Self, at: Point) {
        for y in 0..src.size.h {
            for x in 0..src.size.w {
                if let Some(cell) = src.get(Point { x, y }) {
                    self.put(
                        Point {
                            x: at.x + x,
                            y: at.y + y,
                        },
                        cell.ch,
                        cell.style,
                    );
                }
            }
        }
    }

    /// The characters of one row.
    pub fn line(&self, y: u32) -> Option<String> {
        if y >= self.size.h {
            return None;
        }
        let start = y as usize * self.size.w as usize;
        Some(
            self.cells[start..start + self.size.w as usize]
                .iter()
                .map(|c| c.ch)
                .collect(),
        )
    }

    /// The characters of every row.
    pub fn lines(&self) -> Vec<String> {
        (0..self.size.h).filter_map(|y| self.line(y)).collect()
    }

    /// Emit one run of same-styled cells. `run` starts at column `start`.
    fn emit<R: RenderBackend>(backend: &mut R, run: &[Cell], y: u32, start: usize) -> Result<()> {
        let Some(first) = run.first() else {
            return Ok(());
        };
        let text: String = run.iter().map(|c| c.ch).collect();
        backend.style(&first.style)?;
        backend.text(
            Point {
                x: start as u32,
                y,
            },
            &text,
        )
    }

    /// Render this terminal buffer in full using the provided backend,
    /// batching runs of text with the same style.
    pub fn render<R: RenderBackend>(&self, backend: &mut R) -> Result<()> {
        let width = self.size.w as usize;
        for y in 0..self.size.h {
            let row = &self.cells[y as usize * width..(y as usize + 1) * width];
            let mut x = 0;
            while x < width {
                let start = x;
                while x < width && row[x].style == row[start].style {
                    x += 1;
                }
                Self::emit(backend, &row[start..x], y, start)?;
            }
        }
        backend.flush()
    }

    /// Diff this buffer against a previous state, emitting only changed runs
    /// to the backend. A size change falls back to a full render.
    pub fn diff<R: RenderBackend>(&self, prev: &Self, backend: &mut R) -> Result<()> {
        if self.size != prev.size {
            return self.render(backend);
        }
        let width = self.size.w as usize;
        let mut wrote = false;
        for y in 0..self.size.h {
            let span = y as usize * width..(y as usize + 1) * width;
            let row = &self.cells[span.clone()];
            let old = &prev.cells[span];
            if row == old {
                continue;
            }
            let mut x = 0;
            while x < width {
                if row[x] == old[x] {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < width && row[x] != old[x] && row[x].style == row[start].style {
                    x += 1;
                }
                Self::emit(backend, &row[start..x], y, start)?;
                wrote = true;
            }
        }
        if wrote {
            backend.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{buf, style::Color, testing::buf::BufTest, widgets::frame};

    fn def_style() -> Style {
        Style::new(Color::White, Color::Black)
    }

    #[test]
    fn basic_fill() {
        let mut tb = TermBuf::new(Expanse::new(4, 2), ' ', def_style());
        tb.fill(&def_style(), Rect::new(1, 0, 2, 2), 'x');

        BufTest::new(&tb).assert_matches(buf![
            " xx "
            " xx "
        ]);
    }

    #[test]
    fn text_pads_and_clips() {
        let mut tb = TermBuf::new(Expanse::new(5, 1), '.', def_style());
        tb.text(&def_style(), Line::new(1, 0, 3), "hello");
        BufTest::new(&tb).assert_matches(buf![".hel."]);

        tb.text(&def_style(), Line::new(3, 0, 10), "ab");
        BufTest::new(&tb).assert_matches(buf![".heab"]);
    }

    #[test]
    fn print_leaves_tail() {
        let mut tb = TermBuf::new(Expanse::new(5, 1), '.', def_style());
        tb.print(&def_style(), Point { x: 3, y: 0 }, "xyz");
        BufTest::new(&tb).assert_matches(buf!["...xy"]);
    }

    #[test]
    fn frame_draw() {
        let mut tb = TermBuf::new(Expanse::new(4, 3), ' ', def_style());
        tb.frame(
            &def_style(),
            Frame::new(Rect::new(0, 0, 4, 3), 1),
            &frame::SINGLE,
        );
        BufTest::new(&tb).assert_matches(buf![
            "┌──┐"
            "│  │"
            "└──┘"
        ]);
    }

    #[test]
    fn extract_blit() {
        let mut tb = TermBuf::new(Expanse::new(4, 3), '.', def_style());
        tb.fill(&def_style(), Rect::new(1, 1, 2, 1), 'x');
        let saved = tb.extract(Rect::new(1, 0, 5, 2));
        assert_eq!(saved.size(), Expanse::new(3, 2));

        tb.fill(&def_style(), tb.rect(), '#');
        tb.blit(&saved, Point { x: 1, y: 0 });
        BufTest::new(&tb).assert_matches(buf![
            "#..."
            "#xx."
            "####"
        ]);
    }

    struct RecBackend {
        ops: Vec<String>,
    }

    impl RenderBackend for RecBackend {
        fn style(&mut self, s: &Style) -> Result<()> {
            self.ops.push(format!("style {:?}", s.fg));
            Ok(())
        }

        fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
            self.ops.push(format!("text {} {} {}", loc.x, loc.y, txt));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.ops.push("flush".into());
            Ok(())
        }
    }

    #[test]
    fn render_batches_styles() -> Result<()> {
        let mut tb = TermBuf::new(Expanse::new(3, 1), ' ', def_style());
        tb.put(Point { x: 2, y: 0 }, 'r', Style::new(Color::Red, Color::Black));
        let mut be = RecBackend { ops: vec![] };
        tb.render(&mut be)?;
        assert_eq!(
            be.ops,
            vec![
                "style White",
                "text 0 0   ",
                "style Red",
                "text 2 0 r",
                "flush"
            ]
        );
        Ok(())
    }

    #[test]
    fn render_style_change_mid_row() -> Result<()> {
        let mut tb = TermBuf::new(Expanse::new(6, 1), ' ', def_style());
        tb.put(Point { x: 3, y: 0 }, 'x', Style::new(Color::Red, Color::Black));
        let mut be = RecBackend { ops: vec![] };
        tb.render(&mut be)?;
        assert_eq!(
            be.ops,
            vec![
                "style White",
                "text 0 0    ",
                "style Red",
                "text 3 0 x",
                "style White",
                "text 4 0   ",
                "flush"
            ]
        );

        let prev = TermBuf::new(Expanse::new(6, 1), ' ', def_style());
        let mut be = RecBackend { ops: vec![] };
        tb.diff(&prev, &mut be)?;
        assert_eq!(be.ops, vec!["style Red", "text 3 0 x", "flush"]);
        Ok(())
    }

    #[test]
    fn diff_only_changes() -> Result<()> {
        let prev = TermBuf::new(Expanse::new(4, 2), ' ', def_style());
        let mut cur = prev.clone();
        let mut be = RecBackend { ops: vec![] };
        cur.diff(&prev, &mut be)?;
        assert!(be.ops.is_empty());

        cur.print(&def_style(), Point { x: 1, y: 1 }, "ab");
        cur.diff(&prev, &mut be)?;
        assert_eq!(be.ops, vec!["style White", "text 1 1 ab", "flush"]);
        Ok(())
    }
}
