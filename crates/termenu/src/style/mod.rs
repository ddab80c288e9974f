//! Cell styles and the named palette widgets draw with.

/// Color values.
mod color;
/// Named style slots.
mod palette;

pub use color::Color;
pub use palette::{Slot, StylePalette};

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Reverse video.
    Reverse,
}

/// A set of active text attributes.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Underline flag.
    pub underline: bool,
    /// Reverse video flag.
    pub reverse: bool,
}

impl AttrSet {
    /// Construct a set of text attributes with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.underline || self.reverse)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Underline => self.underline = true,
            Attr::Reverse => self.reverse = true,
        };
        self
    }
}

/// A fully resolved cell style.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    pub attrs: AttrSet,
}

impl Style {
    /// A plain style with the given colors.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attrs: AttrSet::default(),
        }
    }

    /// This style with an attribute added.
    pub fn with(mut self, attr: Attr) -> Self {
        self.attrs = self.attrs.with(attr);
        self
    }

    /// This style with foreground and background swapped.
    pub fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            attrs: self.attrs,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::White, Color::Black)
    }
}
