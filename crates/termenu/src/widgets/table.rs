//! A scrolling grid viewer.
use crate::{
    error::{Error, Result},
    event::KeyCode,
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
};

/// Width of every column, including the gap after it.
const COL_WIDTH: u32 = 15;
/// Helper line at the foot of the viewer.
const HELPER: &str = "Arrows scroll, Q exits";

/// The top-left cell of the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub top: usize,
    /// First visible column.
    pub left: usize,
}

impl Viewport {
    /// Scroll one step. The view never starts past the last row or column.
    pub fn scroll(&mut self, key: KeyCode, rows: usize, cols: usize) {
        match key {
            KeyCode::Up => self.top = self.top.saturating_sub(1),
            KeyCode::Down => self.top = (self.top + 1).min(rows.saturating_sub(1)),
            KeyCode::Left => self.left = self.left.saturating_sub(1),
            KeyCode::Right => self.left = (self.left + 1).min(cols.saturating_sub(1)),
            _ => {}
        }
    }
}

/// Fit a cell's text into a column, leaving a one-space gap.
fn fit(text: &str) -> String {
    let w = COL_WIDTH as usize - 1;
    let clipped: String = text.chars().take(w).collect();
    format!("{clipped:<w$} ")
}

/// Show `data` a screenful at a time. Arrow keys scroll; `q` or Escape
/// exits.
pub fn view_table<S: AsRef<str>>(screen: &mut Screen, title: &str, data: &[Vec<S>]) -> Result<()> {
    let cols = data.iter().map(Vec::len).max().unwrap_or(0);
    if cols == 0 {
        return Err(Error::Invalid(format!("table {title:?} has no cells")));
    }
    let size = screen.size();
    // Leave the status line uncovered.
    let height = size.h.saturating_sub(1);
    let surface = screen.open(
        SurfaceSpec::new(height, size.w, 0, 0)
            .with_title(title)
            .without_shadow(),
    )?;
    let ret = browse(screen, &surface, data, cols);
    screen.close(surface)?;
    ret
}

/// The key loop.
fn browse<S: AsRef<str>>(
    screen: &mut Screen,
    surface: &Surface,
    data: &[Vec<S>],
    cols: usize,
) -> Result<()> {
    let inner = surface.inner();
    let visible_rows = inner.h.saturating_sub(1) as usize;
    let visible_cols = ((inner.w.saturating_sub(1)) / COL_WIDTH) as usize;
    let window = screen.style(Slot::Window);
    let helper = screen.style(Slot::Helper);
    screen.draw(surface, inner.h, 2, HELPER, helper);
    let mut view = Viewport::default();
    loop {
        for r in 0..visible_rows {
            let row = data.get(view.top + r);
            let line: String = (0..visible_cols)
                .map(|c| {
                    row.and_then(|cells| cells.get(view.left + c))
                        .map_or_else(|| fit(""), |s| fit(s.as_ref()))
                })
                .collect();
            screen.draw_padded(surface, r as u32 + 1, 1, inner.w, &format!(" {line}"), window);
        }
        let key = screen.read_key()?;
        if key == KeyCode::Esc || key.printable().is_some_and(|c| c.eq_ignore_ascii_case(&'q')) {
            return Ok(());
        }
        view.scroll(key.key, data.len(), cols);
    }
}
