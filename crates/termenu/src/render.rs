//! The low-level output trait terminals implement.
use crate::{error::Result, geom::Point, style::Style};

/// The trait implemented by renderers.
pub trait RenderBackend {
    /// Apply a style to the following text output.
    fn style(&mut self, style: &Style) -> Result<()>;
    /// Output text to screen. This method is used for all text output.
    fn text(&mut self, loc: Point, txt: &str) -> Result<()>;
    /// Flush output to the terminal.
    fn flush(&mut self) -> Result<()>;
}
