//! Vertical menus and the trees they display.
//!
//! A menu is a list of sibling [`MenuNode`]s. Leaves resolve the menu;
//! branches open a nested menu to the right of the highlighted row. Each
//! level owns one surface on the screen, opened when the level is shown and
//! closed on every way out of it.
use std::iter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    event::{Key, KeyCode},
    hotkey::{self, Hotkeys},
    screen::{Screen, Surface, SurfaceSpec},
};

/// Columns added to the longest label: a leading space, room for the
/// submenu marker and a trailing space.
const ROW_PAD: u32 = 4;

/// One entry in a menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuNode {
    /// An entry that resolves the menu when chosen.
    Leaf {
        /// Displayed text.
        label: String,
        /// Status line text while the entry is highlighted.
        #[serde(default)]
        help: String,
        /// Application-defined identifier for what the entry does.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
    },
    /// An entry that opens a nested menu.
    Branch {
        /// Displayed text.
        label: String,
        /// Status line text while the entry is highlighted.
        #[serde(default)]
        help: String,
        /// The nested menu. Must not be empty.
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// A leaf with no help text or action.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            help: String::new(),
            action: None,
        }
    }

    /// A branch with no help text.
    pub fn branch(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Branch {
            label: label.into(),
            help: String::new(),
            children,
        }
    }

    /// Set the help text.
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { help, .. } | Self::Branch { help, .. } => *help = text.into(),
        }
        self
    }

    /// Set the action of a leaf. Branches ignore this.
    pub fn with_action(mut self, id: impl Into<String>) -> Self {
        if let Self::Leaf { action, .. } = &mut self {
            *action = Some(id.into());
        }
        self
    }

    /// Displayed text.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Branch { label, .. } => label,
        }
    }

    /// Help text.
    pub fn help(&self) -> &str {
        match self {
            Self::Leaf { help, .. } | Self::Branch { help, .. } => help,
        }
    }

    /// The action of a leaf.
    pub fn action(&self) -> Option<&str> {
        match self {
            Self::Leaf { action, .. } => action.as_deref(),
            Self::Branch { .. } => None,
        }
    }

    /// Nested entries. Empty for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Branch { children, .. } => children,
        }
    }

    /// True for branches.
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch { .. })
    }

    /// Check this node and everything beneath it: branches need children,
    /// and every sibling group needs a hotkey per label.
    pub fn validate(&self) -> Result<()> {
        if let Self::Branch { label, children, .. } = self {
            if children.is_empty() {
                return Err(Error::Configuration(format!(
                    "submenu {label:?} has no entries"
                )));
            }
            validate_group(children)?;
        }
        Ok(())
    }
}

/// Check a sibling group and everything beneath it.
pub fn validate_group(nodes: &[MenuNode]) -> Result<()> {
    if nodes.is_empty() {
        return Err(Error::Configuration("menu has no entries".into()));
    }
    hotkeys(nodes)?;
    nodes.iter().try_for_each(MenuNode::validate)
}

/// Follow an index path down a tree.
pub fn resolve<'a>(nodes: &'a [MenuNode], path: &[usize]) -> Option<&'a MenuNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        resolve(node.children(), rest)
    }
}

/// Hotkeys for a sibling group.
fn hotkeys(nodes: &[MenuNode]) -> Result<Hotkeys> {
    let labels: Vec<&str> = nodes.iter().map(MenuNode::label).collect();
    hotkey::assign(&labels)
}

/// How a vertical menu was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A leaf was chosen. The index is within the innermost menu that was
    /// open; the full path is available from [`VerticalMenu::path`].
    Selected(usize),
    /// The user asked for the menu to the left.
    MoveLeft,
    /// The user asked for the menu to the right.
    MoveRight,
    /// The user backed out.
    Cancelled,
}

/// A vertical list of sibling entries.
#[derive(Debug)]
pub struct VerticalMenu<'a> {
    /// The entries.
    items: &'a [MenuNode],
    /// Highlighted entry.
    highlight: usize,
    /// Indices from this level down to the last selection.
    path: Vec<usize>,
}

impl<'a> VerticalMenu<'a> {
    /// A menu over `items`, with the first entry highlighted.
    pub fn new(items: &'a [MenuNode]) -> Self {
        Self {
            items,
            highlight: 0,
            path: vec![],
        }
    }

    /// Start with a different entry highlighted. Out of range indices are
    /// clamped.
    pub fn with_highlight(mut self, idx: usize) -> Self {
        self.highlight = idx.min(self.items.len().saturating_sub(1));
        self
    }

    /// The highlighted entry.
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// The index path of the last selection, starting at this level. Empty
    /// unless the last outcome was [`Outcome::Selected`].
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The surface size for this menu, as `(height, width)`.
    pub fn dimensions(&self) -> (u32, u32) {
        let height = self.items.len() as u32 + 2;
        (height, self.longest() + ROW_PAD + 2)
    }

    /// Longest label, in characters.
    fn longest(&self) -> u32 {
        self.items
            .iter()
            .map(|n| n.label().chars().count() as u32)
            .max()
            .unwrap_or(0)
    }

    /// Show the menu with its top-left corner at `(row, col)` and run it
    /// until it resolves.
    pub fn show(&mut self, screen: &mut Screen, row: u32, col: u32) -> Result<Outcome> {
        if self.items.is_empty() {
            return Err(Error::Configuration("menu has no entries".into()));
        }
        self.items.iter().try_for_each(MenuNode::validate)?;
        let keys = hotkeys(self.items)?;
        let (height, width) = self.dimensions();
        let surface = screen.open(SurfaceSpec::new(height, width, row, col))?;
        self.path.clear();
        let ret = self.navigate(screen, &surface, &keys, (row, col + width));
        screen.close(surface)?;
        if let Ok(outcome) = &ret {
            debug!(?outcome, path = ?self.path, "menu resolved");
        }
        ret
    }

    /// The key loop. `anchor` is where submenus open, before adding the
    /// highlighted row.
    fn navigate(
        &mut self,
        screen: &mut Screen,
        surface: &Surface,
        keys: &Hotkeys,
        anchor: (u32, u32),
    ) -> Result<Outcome> {
        let n = self.items.len();
        loop {
            self.paint(screen, surface, keys);
            screen.status(self.items[self.highlight].help());
            let key = screen.read_key()?;
            match key.key {
                KeyCode::Down => self.highlight = (self.highlight + 1) % n,
                KeyCode::Up => self.highlight = (self.highlight + n - 1) % n,
                KeyCode::Left => return Ok(Outcome::MoveLeft),
                KeyCode::Right => return Ok(Outcome::MoveRight),
                KeyCode::Esc => return Ok(Outcome::Cancelled),
                KeyCode::Enter => return self.enter(screen, anchor),
                _ => self.jump(keys, &key),
            }
        }
    }

    /// Move the highlight to the entry a hotkey names.
    fn jump(&mut self, keys: &Hotkeys, key: &Key) {
        if let Some(idx) = keys.find(key) {
            self.highlight = idx;
        }
    }

    /// Activate the highlighted entry.
    fn enter(&mut self, screen: &mut Screen, anchor: (u32, u32)) -> Result<Outcome> {
        let idx = self.highlight;
        let items = self.items;
        match &items[idx] {
            MenuNode::Leaf { .. } => {
                self.path = vec![idx];
                Ok(Outcome::Selected(idx))
            }
            MenuNode::Branch { children, .. } => {
                let mut sub = Self::new(children);
                let outcome = sub.show(screen, anchor.0 + idx as u32, anchor.1)?;
                if let Outcome::Selected(_) = outcome {
                    self.path = iter::once(idx).chain(sub.path).collect();
                }
                Ok(outcome)
            }
        }
    }

    /// Draw every row. Branch labels carry a `>` marker at the right edge.
    fn paint(&self, screen: &mut Screen, surface: &Surface, keys: &Hotkeys) {
        let longest = self.longest() as usize;
        for (i, node) in self.items.iter().enumerate() {
            let row = i as u32 + 1;
            let (text, mnemonic) = screen.palette().menu_row(i == self.highlight);
            let label = if node.is_branch() {
                format!(" {:<w$}>", node.label(), w = longest + 1)
            } else {
                format!(" {}", node.label())
            };
            screen.draw_padded(surface, row, 1, longest as u32 + ROW_PAD, &label, text);
            if let Some(hk) = keys.get(i) {
                screen.draw(surface, row, hk.offset as u32 + 2, &hk.ch.to_string(), mnemonic);
            }
        }
    }
}
