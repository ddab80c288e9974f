//! A progress bar in its own window.
use tracing::debug;

use crate::{
    error::{Error, Result},
    screen::{Screen, Surface, SurfaceSpec},
};

/// Window height.
const HEIGHT: u32 = 3;
/// Window width.
const WIDTH: u32 = 50;
/// Fill glyph.
const FILL: char = '▒';

/// An open progress window. Dropping it without calling
/// [`close`](Self::close) leaves the window on screen.
#[derive(Debug)]
pub struct ProgressBar {
    /// The window.
    surface: Surface,
    /// The value that means done.
    max: u64,
    /// Cells available to the bar between the brackets.
    bar_width: usize,
    /// Width of the `value/max` label.
    label_width: usize,
}

impl ProgressBar {
    /// Open a progress window just above the middle of the screen, showing
    /// zero progress.
    pub fn create(screen: &mut Screen, max: u64, title: &str) -> Result<Self> {
        if max == 0 {
            return Err(Error::Invalid("progress maximum must be positive".into()));
        }
        let (_, col) = screen.centered(HEIGHT, WIDTH)?;
        let row = (screen.size().h / 2).saturating_sub(1);
        let surface = screen.open(SurfaceSpec::new(HEIGHT, WIDTH, row, col).with_title(title))?;
        let label_width = format!("{max}/{max}").len();
        let mut bar = Self {
            surface,
            max,
            bar_width: WIDTH as usize - label_width - 6,
            label_width,
        };
        bar.update(screen, 0);
        debug!(max, "progress bar opened");
        Ok(bar)
    }

    /// Redraw with `value` complete. Values past the maximum are clamped.
    pub fn update(&mut self, screen: &mut Screen, value: u64) {
        let value = value.min(self.max);
        let filled = (self.bar_width as u64 * value / self.max) as usize;
        let bar: String = (0..self.bar_width)
            .map(|i| if i < filled { FILL } else { ' ' })
            .collect();
        let label = format!("{value}/{}", self.max);
        let st = self.surface.style();
        screen.draw(
            &self.surface,
            1,
            2,
            &format!("[{bar}] {label:>w$}", w = self.label_width),
            st,
        );
    }

    /// Present the current state without waiting for input.
    pub fn present(&self, screen: &mut Screen) -> Result<()> {
        screen.present()
    }

    /// Close the window, restoring what was underneath.
    pub fn close(self, screen: &mut Screen) -> Result<()> {
        screen.close(self.surface)
    }
}
