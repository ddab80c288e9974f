use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::{
    backend::{BackendControl, Terminal},
    error::{Error, Result},
    event::Key,
    geom::{Expanse, Point},
    termbuf::TermBuf,
};

/// Shared state of a scripted terminal, inspected by tests after a widget has
/// run.
#[derive(Debug, Default)]
pub struct ScriptState {
    /// Reported terminal size. Tests change it to simulate a resize.
    pub size: Expanse,
    /// Keys not yet consumed.
    pub keys: VecDeque<Key>,
    /// Number of draws.
    pub frames: usize,
    /// The most recent buffer drawn.
    pub last: Option<TermBuf>,
    /// Current cursor position, if shown.
    pub cursor: Option<Point>,
    /// Every position the cursor was shown at, in order.
    pub cursor_history: Vec<Point>,
    /// Requested pauses, recorded instead of slept.
    pub pauses: Vec<Duration>,
    /// Whether the terminal is between `start` and `stop`.
    pub active: bool,
}

/// A terminal that replays a fixed sequence of keys and records what is
/// drawn. Reading past the end of the script is an error, so a test can't
/// hang waiting for input.
#[derive(Debug)]
pub struct ScriptedTerminal {
    /// State shared with the test.
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTerminal {
    /// Create a terminal of the given size that will replay `keys`. The
    /// returned handle gives access to what was drawn.
    pub fn create(
        size: impl Into<Expanse>,
        keys: impl IntoIterator<Item = Key>,
    ) -> (Arc<Mutex<ScriptState>>, Self) {
        let state = Arc::new(Mutex::new(ScriptState {
            size: size.into(),
            keys: keys.into_iter().collect(),
            ..ScriptState::default()
        }));
        (state.clone(), Self { state })
    }
}

impl BackendControl for ScriptedTerminal {
    fn start(&mut self) -> Result<()> {
        self.state.lock().unwrap().active = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.state.lock().unwrap().active = false;
        Ok(())
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&self) -> Result<Expanse> {
        Ok(self.state.lock().unwrap().size)
    }

    fn draw(&mut self, buf: &TermBuf) -> Result<()> {
        let mut st = self.state.lock().unwrap();
        st.frames += 1;
        st.last = Some(buf.clone());
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        self.state
            .lock()
            .unwrap()
            .keys
            .pop_front()
            .ok_or(Error::ScriptExhausted)
    }

    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        Ok(self.state.lock().unwrap().keys.pop_front())
    }

    fn set_cursor(&mut self, pos: Option<Point>) -> Result<()> {
        let mut st = self.state.lock().unwrap();
        st.cursor = pos;
        if let Some(p) = pos {
            st.cursor_history.push(p);
        }
        Ok(())
    }

    fn pause(&mut self, d: Duration) -> Result<()> {
        self.state.lock().unwrap().pauses.push(d);
        Ok(())
    }
}
