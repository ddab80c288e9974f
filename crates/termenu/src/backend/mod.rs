//! The terminal abstraction. Widgets never talk to a terminal directly: the
//! [`Screen`](crate::Screen) composes into a cell buffer and hands it to a
//! [`Terminal`] to draw, and pulls keys back out of it.

/// Crossterm backend implementation.
pub mod crossterm;
/// A scripted terminal for tests.
#[cfg(any(test, feature = "testing"))]
pub mod test;

use std::{fmt::Debug, thread, time::Duration};

use crate::{
    error::Result,
    event::Key,
    geom::{Expanse, Point},
    termbuf::TermBuf,
};

/// A handle for taking and releasing control of the terminal: raw mode, the
/// alternate screen and so on.
pub trait BackendControl: Debug {
    /// Start the backend renderer.
    fn start(&mut self) -> Result<()>;

    /// Stop the backend renderer, releasing control of the terminal.
    fn stop(&mut self) -> Result<()>;
}

/// Everything the toolkit needs from a terminal.
pub trait Terminal: BackendControl {
    /// Current terminal dimensions.
    fn size(&self) -> Result<Expanse>;

    /// Make the terminal show `buf`.
    fn draw(&mut self, buf: &TermBuf) -> Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> Result<Key>;

    /// Wait at most `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    /// Show the cursor at a location, or hide it.
    fn set_cursor(&mut self, pos: Option<Point>) -> Result<()>;

    /// Hold the current display for a while, e.g. for a timed notification.
    fn pause(&mut self, d: Duration) -> Result<()> {
        thread::sleep(d);
        Ok(())
    }
}
