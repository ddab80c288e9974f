//! Utilities for working with TermBufs in tests.
use crate::{geom::Point, style::Style, termbuf::TermBuf};

/// A helper macro to create buffers for the termbuf match assertions.
#[macro_export]
macro_rules! buf {
    ($($line:literal)*) => {
        &[$($line),*]
    };
}

/// Matches buffer contents against expected lines. Trailing whitespace is
/// ignored on both sides.
pub struct BufTest<'a> {
    /// Reference to the buffer under test.
    buf: &'a TermBuf,
}

impl<'a> BufTest<'a> {
    /// Create a new BufTest with a reference to a TermBuf.
    pub fn new(buf: &'a TermBuf) -> Self {
        Self { buf }
    }

    /// Returns true if the buffer content matches the expected lines.
    pub fn matches(&self, expected: &[&str]) -> bool {
        let actual = self.lines();
        if expected.len() != actual.len() {
            return false;
        }
        expected
            .iter()
            .zip(actual.iter())
            .all(|(e, a)| e.trim_end() == a.trim_end())
    }

    /// Assert that the buffer matches the expected lines with pretty printed
    /// output on failure.
    pub fn assert_matches(&self, expected: &[&str]) {
        if !self.matches(expected) {
            let width = expected
                .iter()
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(10)
                .max(self.buf.size().w as usize);
            println!("\nExpected:");
            println!("┌{}┐", "─".repeat(width));
            for line in expected {
                println!("│{line:width$}│");
            }
            println!("└{}┘", "─".repeat(width));
            self.dump();
            panic!("Buffer contents did not match expected pattern");
        }
    }

    /// Does the buffer contain the supplied substring?
    pub fn contains_text(&self, txt: &str) -> bool {
        self.lines().iter().any(|l| l.contains(txt))
    }

    /// Does the buffer contain the supplied substring drawn entirely in the
    /// given style?
    pub fn contains_text_style(&self, txt: &str, style: &Style) -> bool {
        let tl = txt.chars().count() as u32;
        let size = self.buf.size();
        if tl == 0 || tl > size.w {
            return false;
        }
        (0..size.h).any(|y| {
            (0..=size.w - tl).any(|x| {
                txt.chars().enumerate().all(|(i, ch)| {
                    self.buf
                        .get(Point { x: x + i as u32, y })
                        .is_some_and(|c| c.ch == ch && c.style == *style)
                })
            })
        })
    }

    /// The style of the cell at a position.
    pub fn style_at(&self, x: u32, y: u32) -> Option<Style> {
        self.buf.get(Point { x, y }).map(|c| c.style)
    }

    /// Dumps the contents of the buffer to the terminal for debugging
    /// purposes.
    pub fn dump(&self) {
        let width = self.buf.size().w as usize;
        println!("\nActual ({}x{}):", self.buf.size().w, self.buf.size().h);
        println!("┌{}┐", "─".repeat(width));
        for (y, line) in self.lines().iter().enumerate() {
            println!("│{line}│{}", y % 10);
        }
        println!("└{}┘", "─".repeat(width));
    }

    /// Return the contents of the buffer as lines of text.
    pub fn lines(&self) -> Vec<String> {
        self.buf.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        buf,
        geom::{Expanse, Line},
        style::Color,
    };

    #[test]
    fn matching() {
        let style = Style::default();
        let mut tb = TermBuf::new(Expanse::new(6, 2), ' ', style);
        tb.text(&style, Line::new(0, 0, 6), "hello");
        tb.text(&style, Line::new(1, 1, 4), "world");

        let bt = BufTest::new(&tb);
        assert!(bt.matches(buf!["hello" " worl"]));
        assert!(!bt.matches(buf!["hello" "world"]));
        assert!(!bt.matches(buf!["hello"]));
        assert!(bt.contains_text("worl"));
    }

    #[test]
    fn style_matching() {
        let plain = Style::default();
        let red = Style::new(Color::Red, Color::Black);
        let mut tb = TermBuf::new(Expanse::new(6, 1), ' ', plain);
        tb.print(&red, Point { x: 1, y: 0 }, "ab");
        tb.print(&plain, Point { x: 3, y: 0 }, "c");
        let bt = BufTest::new(&tb);
        assert!(bt.contains_text_style("ab", &red));
        assert!(!bt.contains_text_style("abc", &red));
        assert_eq!(bt.style_at(3, 0), Some(plain));
    }
}
