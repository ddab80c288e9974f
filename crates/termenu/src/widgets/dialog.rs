//! Popups: information and error messages, yes/no confirmation and
//! transient notifications.
use std::time::Duration;

use tracing::debug;

use crate::{
    error::Result,
    event::KeyCode,
    screen::{Screen, SurfaceSpec},
    style::Slot,
};

/// Narrowest message popup.
const POPUP_MIN_WIDTH: u32 = 30;
/// Height of message popups and the confirmation dialog.
const POPUP_HEIGHT: u32 = 7;
/// Width of the confirmation dialog.
const CONFIRM_WIDTH: u32 = 50;

/// Character count as a cell count.
fn cells(s: &str) -> u32 {
    s.chars().count() as u32
}

/// The leading `max` characters of `s`.
fn clip(s: &str, max: u32) -> String {
    s.chars().take(max as usize).collect()
}

/// A centered message popup that waits for any key. Popups never grow past
/// the screen width; text that does not fit is cut short.
fn popup(screen: &mut Screen, style: Slot, title: &str, text: &str) -> Result<()> {
    let width = (cells(text) + 6)
        .max(POPUP_MIN_WIDTH)
        .min(screen.size().w);
    let (row, col) = screen.centered(POPUP_HEIGHT, width)?;
    let surface = screen.open(
        SurfaceSpec::new(POPUP_HEIGHT, width, row, col)
            .with_title(title)
            .with_style(style),
    )?;
    let st = surface.style();
    screen.draw(&surface, 3, 3, &clip(text, width.saturating_sub(6)), st);
    let ret = screen.read_key();
    screen.close(surface)?;
    ret.map(|_| ())
}

/// Show an informational message until a key is pressed.
pub fn info(screen: &mut Screen, text: &str) -> Result<()> {
    popup(screen, Slot::Window, "Info Window", text)
}

/// Show an error message until a key is pressed.
pub fn error(screen: &mut Screen, text: &str) -> Result<()> {
    popup(screen, Slot::Error, "Error Window", text)
}

/// Ask a yes/no question. `y` answers yes; `n` and Escape answer no. Other
/// keys are ignored.
pub fn confirm(screen: &mut Screen, message: &str) -> Result<bool> {
    let width = CONFIRM_WIDTH.min(screen.size().w);
    let (row, col) = screen.centered(POPUP_HEIGHT, width)?;
    let surface = screen.open(SurfaceSpec::new(POPUP_HEIGHT, width, row, col))?;
    let st = surface.style();
    screen.draw(&surface, 2, 2, &clip(message, width.saturating_sub(4)), st);
    screen.draw(&surface, 4, 2, "[Y] Yes    [N] No", st);
    let ret = loop {
        let key = match screen.read_key() {
            Ok(k) => k,
            Err(e) => break Err(e),
        };
        if key == KeyCode::Esc {
            break Ok(false);
        }
        match key.printable().map(|c| c.to_ascii_lowercase()) {
            Some('y') => break Ok(true),
            Some('n') => break Ok(false),
            _ => {}
        }
    };
    screen.close(surface)?;
    debug!(answer = ?ret, "confirm");
    ret
}

/// Show a one-line message for `duration`, then remove it.
pub fn notify(screen: &mut Screen, message: &str, duration: Duration) -> Result<()> {
    let (height, width) = (3, (cells(message) + 4).min(screen.size().w));
    let (row, col) = screen.centered(height, width)?;
    let surface = screen.open(SurfaceSpec::new(height, width, row, col).without_shadow())?;
    let st = surface.style();
    screen.draw(&surface, 1, 2, &clip(message, width.saturating_sub(4)), st);
    let ret = screen.pause(duration);
    screen.close(surface)?;
    ret
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Error,
        event::Key,
        testing::{self, buf::BufTest},
    };

    #[test]
    fn info_popup() -> Result<()> {
        let (state, mut screen) = testing::screen(40, 12, [Key::from('x')])?;
        let before = screen.snapshot();
        info(&mut screen, "saved")?;
        assert_eq!(screen.snapshot(), before);

        let st = state.lock().unwrap();
        let frame = BufTest::new(st.last.as_ref().unwrap()).lines();
        assert_eq!(frame[2].trim_end(), "     ┌──────[ Info Window ]───────┐");
        assert_eq!(frame[5].trim_end(), "     │  saved                     │");
        Ok(())
    }

    #[test]
    fn error_popup_uses_the_error_style() -> Result<()> {
        let (state, mut screen) = testing::screen(40, 12, [Key::from('x')])?;
        error(&mut screen, "no such file")?;
        let st = state.lock().unwrap();
        let frame = st.last.as_ref().unwrap();
        let t = BufTest::new(frame);
        assert!(t.contains_text("[ Error Window ]"));
        assert_eq!(t.style_at(8, 5), Some(screen.style(Slot::Error)));
        Ok(())
    }

    #[test]
    fn confirm_answers() -> Result<()> {
        let keys = [Key::from('q'), Key::from('Y')];
        let (_, mut screen) = testing::screen(60, 12, keys)?;
        assert!(confirm(&mut screen, "Really?")?);

        let (_, mut screen) = testing::screen(60, 12, [Key::from('n')])?;
        assert!(!confirm(&mut screen, "Really?")?);

        let (_, mut screen) = testing::screen(60, 12, [KeyCode::Esc.into()])?;
        assert!(!confirm(&mut screen, "Really?")?);
        assert_eq!(screen.depth(), 0);

        let (_, mut screen) = testing::screen(40, 5, [])?;
        assert!(matches!(
            confirm(&mut screen, "Really?"),
            Err(Error::Configuration(_))
        ));
        Ok(())
    }

    #[test]
    fn confirm_shrinks_to_a_narrow_screen() -> Result<()> {
        let (state, mut screen) = testing::screen(30, 10, [Key::from('y')])?;
        assert!(confirm(&mut screen, "Overwrite every file in the project?")?);
        let st = state.lock().unwrap();
        let frame = BufTest::new(st.last.as_ref().unwrap()).lines();
        assert_eq!(frame[1], format!("┌{}┐", "─".repeat(28)));
        assert_eq!(frame[3], "│ Overwrite every file in th │");
        Ok(())
    }

    #[test]
    fn long_messages_fit_the_screen() -> Result<()> {
        let text = "x".repeat(60);
        let (state, mut screen) = testing::screen(40, 12, [Key::from(' ')])?;
        info(&mut screen, &text)?;
        assert_eq!(screen.depth(), 0);
        let st = state.lock().unwrap();
        let frame = BufTest::new(st.last.as_ref().unwrap()).lines();
        assert_eq!(frame[5], format!("│  {}  │", "x".repeat(34)));

        let (state, mut screen) = testing::screen(20, 12, [])?;
        notify(&mut screen, "a rather long notification", Duration::from_secs(1))?;
        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        assert!(t.contains_text("│ a rather long no │"));
        Ok(())
    }

    #[test]
    fn notify_pauses() -> Result<()> {
        let (state, mut screen) = testing::screen(40, 12, [])?;
        let before = screen.snapshot();
        notify(&mut screen, "done", Duration::from_millis(1500))?;
        assert_eq!(screen.snapshot(), before);
        let st = state.lock().unwrap();
        assert_eq!(st.pauses, vec![Duration::from_millis(1500)]);
        assert!(BufTest::new(st.last.as_ref().unwrap()).contains_text("│ done │"));
        Ok(())
    }
}
