//! The menu bar across the top row of the screen.
//!
//! The bar shows one entry per category. A key picks a category, its menu
//! drops down underneath, and Left/Right inside the menu move along the bar.
//! Backing out of a menu leaves the bar waiting for the next key, so only an
//! escape on the bar itself ends a session.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    event::{Key, KeyCode},
    hotkey::{self, Hotkeys},
    screen::Screen,
    style::Slot,
    widgets::{
        dialog,
        menu::{self, MenuNode, Outcome, VerticalMenu},
    },
};

/// Status text while the bar waits for a key.
const PROMPT: &str = "Make a choice.";

/// A labelled group of menu entries on the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Text on the bar.
    pub label: String,
    /// The menu that drops down.
    pub items: Vec<MenuNode>,
}

impl Category {
    /// Construct a category.
    pub fn new(label: impl Into<String>, items: Vec<MenuNode>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// How a menu bar session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarOutcome {
    /// A leaf was chosen.
    Selected {
        /// Category index.
        category: usize,
        /// Index within the innermost menu.
        item: usize,
        /// Index path from the category's menu down to the leaf.
        path: Vec<usize>,
    },
    /// The first key matched no category. The user has already been told.
    Unmatched(Key),
    /// The user escaped from the bar.
    Dismissed,
}

/// A horizontal bar of categories.
#[derive(Debug)]
pub struct MenuBar<'a> {
    /// The categories, left to right.
    categories: &'a [Category],
}

impl<'a> MenuBar<'a> {
    /// A bar over `categories`.
    pub fn new(categories: &'a [Category]) -> Self {
        Self { categories }
    }

    /// The categories.
    pub fn categories(&self) -> &[Category] {
        self.categories
    }

    /// Check every category and menu before anything is drawn.
    fn validate(&self) -> Result<Hotkeys> {
        if self.categories.is_empty() {
            return Err(Error::Configuration("menu bar has no categories".into()));
        }
        for c in self.categories {
            menu::validate_group(&c.items).map_err(|e| match e {
                Error::Configuration(m) => Error::Configuration(format!("{}: {m}", c.label)),
                e => e,
            })?;
        }
        let labels: Vec<&str> = self.categories.iter().map(|c| c.label.as_str()).collect();
        hotkey::assign(&labels)
    }

    /// Draw the bar on row 0, highlighting `current`. Returns the column
    /// each category starts at.
    fn paint(&self, screen: &mut Screen, keys: &Hotkeys, current: Option<usize>) -> Vec<u32> {
        let mut cols = Vec::with_capacity(self.categories.len());
        let mut col = 0;
        for (i, c) in self.categories.iter().enumerate() {
            let (text, mnemonic) = if current == Some(i) {
                screen.palette().menu_row(true)
            } else {
                (screen.style(Slot::Window), screen.style(Slot::Title))
            };
            screen.write(0, col, &format!(" {} ", c.label), text);
            if let Some(hk) = keys.get(i) {
                screen.write(0, col + 1 + hk.offset as u32, &hk.ch.to_string(), mnemonic);
            }
            cols.push(col);
            col += c.label.chars().count() as u32 + 2;
        }
        let width = screen.size().w.saturating_sub(col);
        let style = screen.style(Slot::Window);
        screen.write_padded(0, col, width, "", style);
        cols
    }

    /// Read a key on the bar, following an escape prefix. Returns `None` for
    /// a bare escape or a doubled one.
    fn read_bar_key(screen: &mut Screen) -> Result<Option<Key>> {
        let key = screen.read_key()?;
        if key != KeyCode::Esc {
            return Ok(Some(key));
        }
        Ok(screen.read_escaped()?.filter(|k| *k != KeyCode::Esc))
    }

    /// Run a session on the bar.
    pub fn run(&self, screen: &mut Screen) -> Result<BarOutcome> {
        let keys = self.validate()?;
        let cols = self.paint(screen, &keys, None);
        screen.status(PROMPT);

        let Some(key) = Self::read_bar_key(screen)? else {
            debug!("menu bar dismissed");
            return Ok(BarOutcome::Dismissed);
        };
        let mut idx = if key == KeyCode::Enter {
            0
        } else if let Some(i) = keys.find(&key) {
            i
        } else {
            let names: Vec<String> = keys.iter().map(|h| h.ch.to_string()).collect();
            warn!("key {key} matches no category");
            dialog::info(
                screen,
                &format!("Key '{key}' not found in [{}]", names.join(", ")),
            )?;
            self.paint(screen, &keys, None);
            return Ok(BarOutcome::Unmatched(key));
        };

        let last = self.categories.len() - 1;
        loop {
            self.paint(screen, &keys, Some(idx));
            let mut menu = VerticalMenu::new(&self.categories[idx].items);
            match menu.show(screen, 1, cols[idx])? {
                Outcome::Selected(item) => {
                    self.paint(screen, &keys, None);
                    let path = menu.path().to_vec();
                    debug!(category = idx, item, ?path, "menu bar selection");
                    return Ok(BarOutcome::Selected {
                        category: idx,
                        item,
                        path,
                    });
                }
                Outcome::MoveRight => idx = (idx + 1).min(last),
                Outcome::MoveLeft => idx = idx.saturating_sub(1),
                Outcome::Cancelled => {
                    self.paint(screen, &keys, None);
                    screen.status(PROMPT);
                    match Self::read_bar_key(screen)? {
                        None => {
                            debug!("menu bar dismissed");
                            return Ok(BarOutcome::Dismissed);
                        }
                        Some(k) => {
                            if let Some(i) = keys.find(&k) {
                                idx = i;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Run a session and report the selection as a 1-based
    /// `(category, item)` pair, or `None` if nothing was chosen.
    pub fn run_pair(&self, screen: &mut Screen) -> Result<Option<(usize, usize)>> {
        Ok(match self.run(screen)? {
            BarOutcome::Selected { category, item, .. } => Some((category + 1, item + 1)),
            BarOutcome::Unmatched(_) | BarOutcome::Dismissed => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{self, buf::BufTest};

    fn bar() -> Vec<Category> {
        vec![
            Category::new("File", vec![MenuNode::leaf("Load"), MenuNode::leaf("Exit")]),
            Category::new(
                "Demos",
                vec![
                    MenuNode::leaf("Browse"),
                    MenuNode::branch(
                        "Input",
                        vec![MenuNode::leaf("Normal"), MenuNode::leaf("Password")],
                    ),
                ],
            ),
            Category::new("Help", vec![MenuNode::leaf("About")]),
        ]
    }

    #[test]
    fn bar_layout() -> Result<()> {
        let cats = bar();
        let (state, mut screen) = testing::screen(30, 8, [KeyCode::Esc.into()])?;
        assert_eq!(MenuBar::new(&cats).run(&mut screen)?, BarOutcome::Dismissed);
        let row = screen.buf().line(0).unwrap();
        assert_eq!(row, format!("{:<30}", " File  Demos  Help "));
        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        assert_eq!(t.style_at(1, 0), Some(screen.style(Slot::Title)));
        assert_eq!(t.style_at(7, 0), Some(screen.style(Slot::Title)));
        assert_eq!(t.style_at(14, 0), Some(screen.style(Slot::Title)));
        assert_eq!(t.style_at(25, 0), Some(screen.style(Slot::Window)));
        Ok(())
    }

    #[test]
    fn enter_opens_the_first_category() -> Result<()> {
        let cats = bar();
        let keys = [KeyCode::Enter.into(), KeyCode::Down.into(), KeyCode::Enter.into()];
        let (_, mut screen) = testing::screen(40, 10, keys)?;
        assert_eq!(
            MenuBar::new(&cats).run(&mut screen)?,
            BarOutcome::Selected {
                category: 0,
                item: 1,
                path: vec![1]
            }
        );
        Ok(())
    }

    #[test]
    fn nested_selection() -> Result<()> {
        let cats = bar();
        let keys = [
            Key::from('d'),
            Key::from('i'),
            KeyCode::Enter.into(),
            KeyCode::Up.into(),
            KeyCode::Enter.into(),
        ];
        let (_, mut screen) = testing::screen(40, 10, keys)?;
        assert_eq!(
            MenuBar::new(&cats).run(&mut screen)?,
            BarOutcome::Selected {
                category: 1,
                item: 1,
                path: vec![1, 1]
            }
        );
        assert_eq!(screen.depth(), 0);
        Ok(())
    }

    #[test]
    fn horizontal_movement_saturates() -> Result<()> {
        let cats = bar();
        let keys = [
            Key::from('h'),
            KeyCode::Right.into(),
            KeyCode::Left.into(),
            KeyCode::Left.into(),
            KeyCode::Left.into(),
            KeyCode::Enter.into(),
        ];
        let (_, mut screen) = testing::screen(40, 10, keys)?;
        assert_eq!(MenuBar::new(&cats).run_pair(&mut screen)?, Some((1, 1)));
        Ok(())
    }

    #[test]
    fn cancel_then_switch() -> Result<()> {
        let cats = bar();
        let keys = [
            Key::from('f'),
            KeyCode::Esc.into(),
            // Escape-prefixed hotkey on the bar.
            KeyCode::Esc.into(),
            Key::from('h'),
            KeyCode::Esc.into(),
            // Anything else reopens the same category.
            Key::from('z'),
            KeyCode::Enter.into(),
        ];
        let (_, mut screen) = testing::screen(40, 10, keys)?;
        assert_eq!(MenuBar::new(&cats).run_pair(&mut screen)?, Some((3, 1)));
        Ok(())
    }

    #[test]
    fn cancel_then_escape_dismisses() -> Result<()> {
        let cats = bar();
        let keys = [Key::from('f'), KeyCode::Esc.into(), KeyCode::Esc.into()];
        let (_, mut screen) = testing::screen(40, 10, keys)?;
        assert_eq!(MenuBar::new(&cats).run(&mut screen)?, BarOutcome::Dismissed);
        Ok(())
    }

    #[test]
    fn unmatched_key_shows_a_popup() -> Result<()> {
        let cats = bar();
        let keys = [Key::from('q'), Key::from(' ')];
        let (state, mut screen) = testing::screen(50, 12, keys)?;
        assert_eq!(
            MenuBar::new(&cats).run(&mut screen)?,
            BarOutcome::Unmatched(Key::from('q'))
        );
        assert_eq!(screen.depth(), 0);
        let st = state.lock().unwrap();
        assert!(st.keys.is_empty());
        Ok(())
    }

    #[test]
    fn unmatched_key_on_a_narrow_screen() -> Result<()> {
        let cats = bar();
        let keys = [Key::from('q'), Key::from(' ')];
        let (state, mut screen) = testing::screen(30, 10, keys)?;
        assert_eq!(
            MenuBar::new(&cats).run(&mut screen)?,
            BarOutcome::Unmatched(Key::from('q'))
        );
        assert_eq!(screen.depth(), 0);
        let st = state.lock().unwrap();
        assert!(st.keys.is_empty());
        Ok(())
    }

    #[test]
    fn configuration_errors() -> Result<()> {
        let (_, mut screen) = testing::screen(40, 10, [])?;
        assert!(matches!(
            MenuBar::new(&[]).run(&mut screen),
            Err(Error::Configuration(_))
        ));
        let cats = [Category::new("Empty", vec![])];
        assert!(matches!(
            MenuBar::new(&cats).run(&mut screen),
            Err(Error::Configuration(m)) if m.starts_with("Empty")
        ));
        Ok(())
    }
}
