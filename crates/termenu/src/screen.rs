//! The modal surface manager.
//!
//! A [`Screen`] owns the terminal and a single composed cell buffer. Widgets
//! open [`Surface`]s on it: bordered rectangles that save whatever they cover
//! when they open and put it back when they close. Surfaces form a strict
//! stack, so closing them in reverse order always returns the screen to the
//! exact state it was in before the first one opened.
use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    backend::Terminal,
    error::{Error, Result},
    event::Key,
    geom::{Expanse, Line, Point, Rect},
    options::Options,
    style::{Slot, Style, StylePalette},
    termbuf::TermBuf,
    widgets::statusbar,
};

/// Everything needed to open a surface. Coordinates are screen rows and
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Height in rows, including the border.
    pub height: u32,
    /// Width in columns, including the border.
    pub width: u32,
    /// Screen row of the top edge.
    pub row: u32,
    /// Screen column of the left edge.
    pub col: u32,
    /// Title shown centered on the top border as `[ title ]`.
    pub title: Option<String>,
    /// Interior and border style.
    pub style: Slot,
    /// Draw a border.
    pub border: bool,
    /// Draw a drop shadow, if the screen options allow it.
    pub shadow: bool,
}

impl SurfaceSpec {
    /// A bordered, shadowed surface in the window style.
    pub fn new(height: u32, width: u32, row: u32, col: u32) -> Self {
        Self {
            height,
            width,
            row,
            col,
            title: None,
            style: Slot::Window,
            border: true,
            shadow: true,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use a different style slot.
    pub fn with_style(mut self, style: Slot) -> Self {
        self.style = style;
        self
    }

    /// Turn the drop shadow off.
    pub fn without_shadow(mut self) -> Self {
        self.shadow = false;
        self
    }

    /// Turn the border off.
    pub fn without_border(mut self) -> Self {
        self.border = false;
        self
    }

    /// The rectangle the surface occupies.
    fn rect(&self) -> Rect {
        Rect::new(self.col, self.row, self.width, self.height)
    }
}

/// A handle to an open surface. Drawing goes through the [`Screen`], using
/// coordinates local to the surface: `(0, 0)` is the top-left border cell.
///
/// Handles are deliberately not `Clone`: closing consumes the handle.
#[derive(Debug, PartialEq, Eq)]
pub struct Surface {
    /// Stack identity.
    id: u64,
    /// Screen rectangle.
    rect: Rect,
    /// Whether the surface has a border.
    border: bool,
    /// Interior style.
    style: Style,
}

impl Surface {
    /// The surface's screen rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Dimensions.
    pub fn size(&self) -> Expanse {
        self.rect.expanse()
    }

    /// Height in rows.
    pub fn height(&self) -> u32 {
        self.rect.h
    }

    /// Width in columns.
    pub fn width(&self) -> u32 {
        self.rect.w
    }

    /// The usable area inside the border, in local coordinates.
    pub fn inner(&self) -> Rect {
        let local = self.size().rect();
        if self.border { local.inner(1) } else { local }
    }

    /// The interior style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Convert a local position to a screen position.
    fn point(&self, row: u32, col: u32) -> Point {
        Point {
            x: self.rect.tl.x + col,
            y: self.rect.tl.y + row,
        }
    }
}

/// A saved region, restored when its surface closes.
#[derive(Debug)]
struct Layer {
    /// Identity of the owning surface.
    id: u64,
    /// Where the saved cells go back.
    at: Point,
    /// Cells covered by the surface and its shadow.
    saved: TermBuf,
}

/// The terminal, its composed buffer and the stack of open surfaces.
#[derive(Debug)]
pub struct Screen {
    /// The terminal we draw to.
    term: Box<dyn Terminal>,
    /// Composed screen content.
    buf: TermBuf,
    /// Open surfaces, innermost last.
    stack: Vec<Layer>,
    /// Styles.
    palette: StylePalette,
    /// Presentation options.
    options: Options,
    /// Cursor position, if shown.
    cursor: Option<Point>,
    /// Next surface id.
    next_id: u64,
    /// Whether the terminal has been started and not yet stopped.
    active: bool,
    /// The current status message, redrawn when the terminal is resized.
    status: Option<String>,
}

impl Screen {
    /// Take over the terminal and paint the screen background.
    pub fn new(mut term: Box<dyn Terminal>, palette: StylePalette, options: Options) -> Result<Self> {
        term.start()?;
        let size = term.size()?;
        let buf = TermBuf::new(size, ' ', palette.get(Slot::ScreenBackground));
        debug!("screen started at {}x{}", size.w, size.h);
        Ok(Self {
            term,
            buf,
            stack: vec![],
            palette,
            options,
            cursor: None,
            next_id: 0,
            active: true,
            status: None,
        })
    }

    /// Screen dimensions.
    pub fn size(&self) -> Expanse {
        self.buf.size()
    }

    /// The style palette.
    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    /// Look up a style slot.
    pub fn style(&self, slot: Slot) -> Style {
        self.palette.get(slot)
    }

    /// Presentation options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The composed buffer.
    pub fn buf(&self) -> &TermBuf {
        &self.buf
    }

    /// A copy of the composed buffer, for comparing before and after.
    pub fn snapshot(&self) -> TermBuf {
        self.buf.clone()
    }

    /// Number of open surfaces.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Repaint the whole screen with the background. Only valid with no
    /// surfaces open, since it would wipe their saved content.
    pub fn clear(&mut self) -> Result<()> {
        if !self.stack.is_empty() {
            return Err(Error::Surface(format!(
                "cannot clear with {} surfaces open",
                self.stack.len()
            )));
        }
        let style = self.style(Slot::ScreenBackground);
        let r = self.buf.rect();
        self.buf.fill(&style, r, ' ');
        Ok(())
    }

    /// The top-left position that centers a `height` x `width` region on the
    /// screen, as `(row, col)`.
    pub fn centered(&self, height: u32, width: u32) -> Result<(u32, u32)> {
        let r = self.buf.rect().center(Expanse::new(width, height)).map_err(|_| {
            Error::Configuration(format!(
                "{width}x{height} does not fit on a {}x{} screen",
                self.size().w,
                self.size().h
            ))
        })?;
        Ok((r.tl.y, r.tl.x))
    }

    /// Open a surface. The surface must fit on the screen; its shadow is
    /// clipped.
    pub fn open(&mut self, spec: SurfaceSpec) -> Result<Surface> {
        let rect = spec.rect();
        if rect.is_empty() {
            return Err(Error::Invalid(format!(
                "surface must have non-zero size, got {}x{}",
                spec.width, spec.height
            )));
        }
        if spec.border && (spec.width < 2 || spec.height < 2) {
            return Err(Error::Configuration(format!(
                "a bordered surface needs at least 2x2 cells, got {}x{}",
                spec.width, spec.height
            )));
        }
        if !self.buf.rect().contains_rect(&rect) {
            return Err(Error::Configuration(format!(
                "surface {}x{} at ({}, {}) does not fit on a {}x{} screen",
                spec.width,
                spec.height,
                spec.row,
                spec.col,
                self.size().w,
                self.size().h
            )));
        }

        let shadow = if spec.shadow && self.options.shadow {
            Some(rect.shift(2, 1))
        } else {
            None
        };
        let covered = shadow.map_or(rect, |s| rect.union(&s));
        let covered = self.buf.rect().intersect(&covered).unwrap_or(rect);
        let saved = self.buf.extract(covered);

        if let Some(s) = shadow {
            let st = self.style(Slot::Shadow);
            self.buf.fill(&st, s, ' ');
        }
        let style = self.style(spec.style);
        self.buf.fill(&style, rect, ' ');
        if spec.border {
            let glyphs = self.options.border;
            self.buf.frame(&style, rect.frame(1), &glyphs);
        }
        if let Some(title) = &spec.title {
            // Titles stay between the corners, cut short if need be.
            let (inset, room) = if spec.border {
                (1, spec.width - 2)
            } else {
                (0, spec.width)
            };
            let fit: String = title.chars().take(room.saturating_sub(4) as usize).collect();
            let decorated: String = self
                .options
                .border
                .decorate(&fit)
                .chars()
                .take(room as usize)
                .collect();
            let len = decorated.chars().count() as u32;
            let col = inset + (room - len) / 2;
            let title_style = self.style(Slot::Title);
            self.buf.text(
                &title_style,
                Line::new(rect.tl.x + col, rect.tl.y, len),
                &decorated,
            );
        }

        let id = self.next_id;
        self.next_id += 1;
        self.stack.push(Layer {
            id,
            at: covered.tl,
            saved,
        });
        debug!(
            id,
            depth = self.stack.len(),
            "open surface {}x{} at ({}, {})",
            spec.width,
            spec.height,
            spec.row,
            spec.col
        );
        Ok(Surface {
            id,
            rect,
            border: spec.border,
            style,
        })
    }

    /// Close the innermost surface, restoring what it covered.
    pub fn close(&mut self, surface: Surface) -> Result<()> {
        match self.stack.last() {
            Some(top) if top.id == surface.id => {}
            Some(top) => {
                return Err(Error::Surface(format!(
                    "surface {} closed while surface {} is still open above it",
                    surface.id, top.id
                )));
            }
            None => {
                return Err(Error::Surface(format!(
                    "surface {} is not open",
                    surface.id
                )));
            }
        }
        if let Some(layer) = self.stack.pop() {
            self.buf.blit(&layer.saved, layer.at);
        }
        if self
            .cursor
            .is_some_and(|c| surface.rect.contains_point(c))
        {
            self.cursor = None;
        }
        debug!(id = surface.id, depth = self.stack.len(), "close surface");
        Ok(())
    }

    /// Draw text at a local position inside a surface, clipped to the
    /// surface.
    pub fn draw(&mut self, surface: &Surface, row: u32, col: u32, text: &str, style: Style) {
        if row >= surface.rect.h || col >= surface.rect.w {
            return;
        }
        let p = surface.point(row, col);
        let max = (surface.rect.w - col) as usize;
        let clipped: String = text.chars().take(max).collect();
        self.buf.print(&style, p, &clipped);
    }

    /// Draw text padded with spaces to exactly `width` columns.
    pub fn draw_padded(
        &mut self,
        surface: &Surface,
        row: u32,
        col: u32,
        width: u32,
        text: &str,
        style: Style,
    ) {
        if row >= surface.rect.h || col >= surface.rect.w {
            return;
        }
        let p = surface.point(row, col);
        let w = width.min(surface.rect.w - col);
        self.buf.text(&style, Line::new(p.x, p.y, w), text);
    }

    /// Redraw a surface's border.
    pub fn draw_border(&mut self, surface: &Surface) {
        let glyphs = self.options.border;
        self.buf
            .frame(&surface.style, surface.rect.frame(1), &glyphs);
    }

    /// Blank the inside of a surface.
    pub fn clear_surface(&mut self, surface: &Surface) {
        let inner = surface.inner();
        let r = Rect::new(
            surface.rect.tl.x + inner.tl.x,
            surface.rect.tl.y + inner.tl.y,
            inner.w,
            inner.h,
        );
        self.buf.fill(&surface.style, r, ' ');
    }

    /// Write a message on the status line, the last row of the screen.
    pub fn status(&mut self, text: &str) {
        let size = self.size();
        if size.h == 0 {
            return;
        }
        let line = statusbar::render(self.options.status_prefix, text);
        let style = self.style(Slot::StatusBar);
        self.buf.text(&style, Line::new(0, size.h - 1, size.w), &line);
        self.status = Some(text.to_string());
    }

    /// Follow a change in terminal size. The composed content is kept,
    /// clipped or extended with background, and the status line moves to the
    /// new bottom row.
    fn sync_size(&mut self) -> Result<()> {
        let size = self.term.size()?;
        let old = self.buf.size();
        if size == old {
            return Ok(());
        }
        debug!("screen resized from {}x{} to {}x{}", old.w, old.h, size.w, size.h);
        let background = self.style(Slot::ScreenBackground);
        let mut buf = TermBuf::new(size, ' ', background);
        buf.blit(&self.buf, Point::zero());
        if let Some(text) = self.status.take() {
            if old.h > 0 {
                buf.fill(&background, Rect::new(0, old.h - 1, old.w, 1), ' ');
            }
            self.buf = buf;
            self.status(&text);
        } else {
            self.buf = buf;
        }
        Ok(())
    }

    /// Draw text directly on the screen, beneath any surface. Used for bars
    /// that live outside the surface stack.
    pub fn write(&mut self, row: u32, col: u32, text: &str, style: Style) {
        if row < self.size().h {
            self.buf.print(&style, Point { x: col, y: row }, text);
        }
    }

    /// Draw text directly on the screen, padded to `width` columns.
    pub fn write_padded(&mut self, row: u32, col: u32, width: u32, text: &str, style: Style) {
        self.buf.text(&style, Line::new(col, row, width), text);
    }

    /// Show the cursor at a local position inside a surface.
    pub fn show_cursor(&mut self, surface: &Surface, row: u32, col: u32) {
        self.cursor = Some(surface.point(row, col));
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    /// Push the composed buffer and cursor state to the terminal.
    pub fn present(&mut self) -> Result<()> {
        self.sync_size()?;
        self.term.draw(&self.buf)?;
        self.term.set_cursor(self.cursor)
    }

    /// Present, then block for the next key.
    pub fn read_key(&mut self) -> Result<Key> {
        self.present()?;
        let k = self.term.read_key()?;
        trace!("key {k}");
        Ok(k)
    }

    /// Read the key following an escape. Returns `None` if nothing arrives
    /// within the escape timeout.
    pub fn read_escaped(&mut self) -> Result<Option<Key>> {
        let k = self.term.poll_key(self.options.escape_timeout)?;
        if let Some(k) = &k {
            trace!("escaped key {k}");
        }
        Ok(k)
    }

    /// Present, then hold the display for `d`.
    pub fn pause(&mut self, d: Duration) -> Result<()> {
        self.present()?;
        self.term.pause(d)
    }

    /// Release the terminal. Open surfaces are discarded.
    pub fn finish(mut self) -> Result<()> {
        self.active = false;
        self.term.stop()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.active {
            drop(self.term.stop());
            self.active = false;
        }
    }
}
