use std::collections::HashMap;

use super::{Attr, Color, Style};

/// The named roles a widget can draw with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Slot {
    /// The screen behind every surface.
    ScreenBackground,
    /// Surface interiors and borders.
    Window,
    /// Drop shadows.
    Shadow,
    /// `[ title ]` decorations on the top border.
    Title,
    /// Editable input regions.
    InputField,
    /// Helper lines at the foot of a dialog.
    Helper,
    /// The highlighted menu row.
    Selected,
    /// Menu rows that are not highlighted.
    Unselected,
    /// The mnemonic inside the highlighted row.
    HotkeySelected,
    /// The mnemonic inside other rows.
    HotkeyUnselected,
    /// Error popups.
    Error,
    /// The status line on the last row of the screen.
    StatusBar,
}

/// Every slot, in declaration order.
const SLOTS: [Slot; 12] = [
    Slot::ScreenBackground,
    Slot::Window,
    Slot::Shadow,
    Slot::Title,
    Slot::InputField,
    Slot::Helper,
    Slot::Selected,
    Slot::Unselected,
    Slot::HotkeySelected,
    Slot::HotkeyUnselected,
    Slot::Error,
    Slot::StatusBar,
];

/// A complete mapping from slots to styles. Built once and passed by
/// reference to everything that draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePalette {
    /// Resolved styles.
    styles: HashMap<Slot, Style>,
}

impl Default for StylePalette {
    /// The classic blue-screen scheme: yellow on blue behind white dialogs,
    /// green highlights and red mnemonics.
    fn default() -> Self {
        let mut styles = HashMap::new();
        let window = Style::new(Color::Black, Color::White);
        styles.insert(
            Slot::ScreenBackground,
            Style::new(Color::Yellow, Color::Blue),
        );
        styles.insert(Slot::Window, window);
        styles.insert(
            Slot::Shadow,
            Style::new(Color::White, Color::Black).with(Attr::Dim),
        );
        styles.insert(Slot::Title, window.reversed());
        styles.insert(Slot::InputField, Style::new(Color::White, Color::Blue));
        styles.insert(Slot::Helper, Style::new(Color::Black, Color::Green));
        styles.insert(Slot::Selected, Style::new(Color::Black, Color::Green));
        styles.insert(Slot::Unselected, window);
        styles.insert(Slot::HotkeySelected, Style::new(Color::Red, Color::Green));
        styles.insert(Slot::HotkeyUnselected, Style::new(Color::Red, Color::White));
        styles.insert(Slot::Error, Style::new(Color::White, Color::Red));
        styles.insert(Slot::StatusBar, window);
        Self { styles }
    }
}

impl StylePalette {
    /// A palette where every slot has the same style. Useful as a base for
    /// monochrome terminals.
    pub fn uniform(style: Style) -> Self {
        Self {
            styles: SLOTS.iter().map(|s| (*s, style)).collect(),
        }
    }

    /// Look up the style for a slot.
    pub fn get(&self, slot: Slot) -> Style {
        self.styles.get(&slot).copied().unwrap_or_default()
    }

    /// Replace the style for a slot.
    pub fn with(mut self, slot: Slot, style: Style) -> Self {
        self.styles.insert(slot, style);
        self
    }

    /// The (text, mnemonic) style pair for a menu row.
    pub fn menu_row(&self, highlighted: bool) -> (Style, Style) {
        if highlighted {
            (self.get(Slot::Selected), self.get(Slot::HotkeySelected))
        } else {
            (self.get(Slot::Unselected), self.get(Slot::HotkeyUnselected))
        }
    }
}
