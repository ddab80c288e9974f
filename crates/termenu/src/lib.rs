//! termenu: menus, dialogs and input fields for character-cell terminals.
//!
//! The toolkit is synchronous. A [`Screen`] owns the terminal and a stack of
//! modal surfaces; every widget borrows the screen, opens a surface, blocks
//! on keys until it resolves, closes its surface and returns a typed outcome.
//!
//! # Module Organization
//!
//! - [`geom`] - cell geometry (Rect, Point, Expanse)
//! - [`backend`] - the terminal abstraction and its crossterm implementation
//! - [`screen`] - the modal surface manager
//! - [`hotkey`] and [`justify`] - the text algorithms menus and pagers share
//! - [`widgets`] - menus, the menu bar, input fields and the widget layer

#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod event;
pub mod hotkey;
pub mod justify;
pub mod options;
pub mod render;
pub mod screen;
pub mod style;
pub mod termbuf;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod widgets;

pub use termenu_geom as geom;

pub use error::{Error, Result};
pub use options::Options;
pub use screen::{Screen, Surface, SurfaceSpec};
pub use style::{Slot, StylePalette};
pub use termbuf::TermBuf;
