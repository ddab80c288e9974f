//! Glyphs for surface borders and the marks drawn on them.

/// Border glyphs, plus the brackets that set a title into the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    /// Top-left corner.
    pub topleft: char,
    /// Top-right corner.
    pub topright: char,
    /// Bottom-left corner.
    pub bottomleft: char,
    /// Bottom-right corner.
    pub bottomright: char,
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
    /// Opens a title.
    pub title_open: char,
    /// Closes a title.
    pub title_close: char,
}

impl FrameGlyphs {
    /// A title as it appears on the top edge: `[ title ]` with the default
    /// brackets.
    pub fn decorate(&self, title: &str) -> String {
        format!("{} {title} {}", self.title_open, self.title_close)
    }
}

/// Thin single lines. The default.
pub const SINGLE: FrameGlyphs = FrameGlyphs {
    topleft: '┌',
    topright: '┐',
    bottomleft: '└',
    bottomright: '┘',
    horizontal: '─',
    vertical: '│',
    title_open: '[',
    title_close: ']',
};

/// Double lines.
pub const DOUBLE: FrameGlyphs = FrameGlyphs {
    topleft: '╔',
    topright: '╗',
    bottomleft: '╚',
    bottomright: '╝',
    horizontal: '═',
    vertical: '║',
    title_open: '[',
    title_close: ']',
};

/// Plain ASCII, for terminals without box drawing glyphs.
pub const ASCII: FrameGlyphs = FrameGlyphs {
    topleft: '+',
    topright: '+',
    bottomleft: '+',
    bottomright: '+',
    horizontal: '-',
    vertical: '|',
    title_open: '[',
    title_close: ']',
};

/// Scroll indicator: arrow at the top of the track.
pub const SCROLL_UP: char = '▲';
/// Scroll indicator: arrow at the bottom of the track.
pub const SCROLL_DOWN: char = '▼';
/// Scroll indicator: empty track.
pub const TRACK: char = '░';
/// Scroll indicator: the thumb.
pub const THUMB: char = '█';

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Options, Screen, StylePalette, SurfaceSpec, backend::test::ScriptedTerminal, error::Result,
    };

    #[test]
    fn titles() {
        assert_eq!(SINGLE.decorate("Info"), "[ Info ]");
        assert_eq!(ASCII.decorate(""), "[  ]");
        assert_eq!(DOUBLE.decorate("x"), SINGLE.decorate("x"));
    }

    #[test]
    fn ascii_borders() -> Result<()> {
        let (_, term) = ScriptedTerminal::create((12, 4), []);
        let mut screen = Screen::new(
            Box::new(term),
            StylePalette::default(),
            Options::default().with_shadow(false).with_border(ASCII),
        )?;
        let s = screen.open(SurfaceSpec::new(3, 10, 0, 0).with_title("t"))?;
        let line = |screen: &Screen, y| screen.buf().line(y).unwrap_or_default();
        assert_eq!(line(&screen, 0).trim_end(), "+-[ t ]--+");
        assert_eq!(line(&screen, 1).trim_end(), "|        |");
        assert_eq!(line(&screen, 2).trim_end(), "+--------+");
        screen.close(s)?;
        Ok(())
    }
}
