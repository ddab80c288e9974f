//! Input events. termenu only consumes the keyboard.

pub mod key;

pub use key::{Key, KeyCode};
