//! Helpers for driving widgets from tests.
use std::sync::{Arc, Mutex};

use crate::{
    Options, Screen, StylePalette,
    backend::test::{ScriptState, ScriptedTerminal},
    error::Result,
    event::Key,
};

/// Buffer matching.
pub mod buf;

/// Keys for typing a string, one character at a time.
pub fn typed(s: &str) -> Vec<Key> {
    s.chars().map(Key::from).collect()
}

/// A screen backed by a scripted terminal that will replay `keys`. Shadows
/// are off so that rendered output is easy to match.
pub fn screen(
    w: u32,
    h: u32,
    keys: impl IntoIterator<Item = Key>,
) -> Result<(Arc<Mutex<ScriptState>>, Screen)> {
    let (state, term) = ScriptedTerminal::create((w, h), keys);
    let screen = Screen::new(
        Box::new(term),
        StylePalette::default(),
        Options::default().with_shadow(false),
    )?;
    Ok((state, screen))
}
