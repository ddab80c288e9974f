//! Mnemonic assignment for sibling labels.
//!
//! Each label gets the first character, reading left to right, that no
//! earlier label in the group has claimed. Claims are case-insensitive,
//! because keys are matched after uppercasing: a claimed `a` also blocks `A`.
use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    event::Key,
};

/// The mnemonic chosen for one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    /// The character as it appears in the label.
    pub ch: char,
    /// Character offset of the mnemonic within the label.
    pub offset: usize,
}

impl Hotkey {
    /// The case-folded form keys are matched against.
    pub fn folded(&self) -> char {
        fold(self.ch)
    }
}

/// Uppercase a character for comparison.
fn fold(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// The mnemonics for a sibling group, in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkeys {
    /// One entry per label.
    keys: Vec<Hotkey>,
}

impl Hotkeys {
    /// The mnemonic for the label at `idx`.
    pub fn get(&self, idx: usize) -> Option<Hotkey> {
        self.keys.get(idx).copied()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the mnemonics in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Hotkey> {
        self.keys.iter()
    }

    /// The position of the label whose mnemonic matches `c`, ignoring case.
    pub fn find_char(&self, c: char) -> Option<usize> {
        let c = fold(c);
        self.keys.iter().position(|h| h.folded() == c)
    }

    /// The position of the label a key press selects, if any.
    pub fn find(&self, key: &Key) -> Option<usize> {
        key.hotkey().and_then(|c| self.find_char(c))
    }
}

/// Assign a distinct mnemonic to each label. Fails with a configuration
/// error naming the first label that has no unclaimed character left.
pub fn assign<S: AsRef<str>>(labels: &[S]) -> Result<Hotkeys> {
    let mut claimed = HashSet::new();
    let mut keys = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.as_ref();
        let found = label
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_whitespace() && !claimed.contains(&fold(*c)));
        match found {
            Some((offset, ch)) => {
                claimed.insert(fold(ch));
                keys.push(Hotkey { ch, offset });
            }
            None => {
                return Err(Error::Configuration(format!(
                    "no unique hotkey available for label {label:?}"
                )));
            }
        }
    }
    Ok(Hotkeys { keys })
}
