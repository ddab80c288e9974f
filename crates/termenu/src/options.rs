//! Screen-wide presentation options.
use std::time::Duration;

use crate::widgets::frame::{self, FrameGlyphs};

/// Presentation options shared by every surface on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Draw drop shadows under surfaces that ask for one.
    pub shadow: bool,
    /// Glyphs used for surface borders.
    pub border: FrameGlyphs,
    /// How long to wait after a lone escape for the key it prefixes.
    pub escape_timeout: Duration,
    /// Leader text drawn before every status message.
    pub status_prefix: &'static str,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            shadow: true,
            border: frame::SINGLE,
            escape_timeout: Duration::from_millis(50),
            status_prefix: " StatusBar | ",
        }
    }
}

impl Options {
    /// Turn drop shadows on or off.
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Use a different border glyph set.
    pub fn with_border(mut self, border: FrameGlyphs) -> Self {
        self.border = border;
        self
    }

    /// Change the escape-prefix timeout.
    pub fn with_escape_timeout(mut self, timeout: Duration) -> Self {
        self.escape_timeout = timeout;
        self
    }
}
