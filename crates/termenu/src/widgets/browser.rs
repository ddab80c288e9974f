//! A scrolling viewer for justified text.
use tracing::trace;

use crate::{
    error::{Error, Result},
    event::KeyCode,
    justify,
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
    widgets::frame,
};

/// Helper line on the bottom border.
const HELPER: &str = "<ESC> Exit /// Up/Down to browse";

/// The position and length of the scroll thumb within a track of `track`
/// cells, or `None` if everything fits and there is nothing to scroll.
pub fn thumb(total: usize, visible: usize, start: usize, track: usize) -> Option<(usize, usize)> {
    if total <= visible || track == 0 {
        return None;
    }
    let len = (track * visible / total).clamp(1, track);
    let max_start = total - visible;
    let max_pos = track - len;
    let pos = (start.min(max_start) * max_pos + max_start / 2) / max_start;
    Some((pos, len))
}

/// Text justified to a fixed width and shown a page at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBrowser {
    /// Window title.
    title: String,
    /// Justified lines.
    lines: Vec<String>,
    /// Text width in columns.
    width: u32,
    /// Visible rows.
    height: u32,
}

impl TextBrowser {
    /// Check the viewport size.
    fn check(width: u32, height: u32) -> Result<()> {
        if height < 3 {
            return Err(Error::Invalid(format!(
                "a text browser needs at least 3 rows, got {height}"
            )));
        }
        if width == 0 {
            return Err(Error::Invalid("text browser width must be positive".into()));
        }
        Ok(())
    }

    /// A browser over `text`, justified as a single block.
    pub fn new(title: impl Into<String>, text: &str, width: u32, height: u32) -> Result<Self> {
        Self::check(width, height)?;
        Ok(Self {
            title: title.into(),
            lines: justify::justify(text, width as usize)?,
            width,
            height,
        })
    }

    /// A browser over `text` split into paragraphs at blank lines. Each
    /// paragraph is aligned on its own, with a blank line between them.
    pub fn from_paragraphs(
        title: impl Into<String>,
        text: &str,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Self::check(width, height)?;
        let mut lines = vec![];
        let mut para: Vec<&str> = vec![];
        for l in text.lines().chain([""]) {
            if !l.trim().is_empty() {
                para.push(l.trim());
                continue;
            }
            if para.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(" ".repeat(width as usize));
            }
            lines.extend(justify::align_paragraph(&para, width as usize)?);
            para.clear();
        }
        Ok(Self {
            title: title.into(),
            lines,
            width,
            height,
        })
    }

    /// The lines being browsed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The furthest the view can scroll.
    fn max_start(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    /// Show the browser until Escape is pressed.
    pub fn run(&self, screen: &mut Screen) -> Result<()> {
        screen.status("Browsing text.");
        let (h, w) = (self.height + 2, self.width + 4);
        let (row, col) = screen.centered(h, w)?;
        let surface = screen.open(SurfaceSpec::new(h, w, row, col).with_title(self.title.as_str()))?;
        let ret = self.browse(screen, &surface);
        screen.close(surface)?;
        ret
    }

    /// The key loop.
    fn browse(&self, screen: &mut Screen, surface: &Surface) -> Result<()> {
        let page = self.height as usize;
        let max = self.max_start();
        let mut start = 0;
        let helper = screen.style(Slot::Helper);
        screen.draw_padded(
            surface,
            self.height + 1,
            2,
            self.width,
            &format!("{HELPER:^w$}", w = self.width as usize),
            helper,
        );
        loop {
            self.paint(screen, surface, start);
            let key = screen.read_key()?;
            start = match key.key {
                KeyCode::Esc => return Ok(()),
                KeyCode::Up => start.saturating_sub(1),
                KeyCode::Down => (start + 1).min(max),
                KeyCode::PageUp => start.saturating_sub(page),
                KeyCode::PageDown => (start + page).min(max),
                KeyCode::Home => 0,
                KeyCode::End => max,
                _ => start,
            };
            trace!(start, "browser scrolled");
        }
    }

    /// Draw the visible lines and the scroll indicator.
    fn paint(&self, screen: &mut Screen, surface: &Surface, start: usize) {
        let text = screen.style(Slot::Window);
        for i in 0..self.height {
            let line = self
                .lines
                .get(start + i as usize)
                .map_or("", String::as_str);
            screen.draw_padded(surface, i + 1, 2, self.width, line, text);
        }

        let bar = text.reversed();
        let col = self.width + 3;
        screen.draw(surface, 1, col, &frame::SCROLL_UP.to_string(), bar);
        screen.draw(surface, self.height, col, &frame::SCROLL_DOWN.to_string(), bar);
        let track = self.height as usize - 2;
        let th = thumb(self.lines.len(), self.height as usize, start, track);
        for i in 0..track {
            let glyph = match th {
                Some((pos, len)) if (pos..pos + len).contains(&i) => frame::THUMB,
                _ => frame::TRACK,
            };
            screen.draw(surface, i as u32 + 2, col, &glyph.to_string(), bar);
        }
    }
}
