use std::{
    io::{self, Stderr, Write},
    panic::{self, PanicHookInfo},
    time::Duration,
};

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor as ccursor, event as cevent, style, terminal,
};
use scopeguard::{ScopeGuard, guard};

use crate::{
    backend::{BackendControl, Terminal},
    error::Result,
    event::key,
    geom::{Expanse, Point},
    render::RenderBackend,
    style::{Color, Style},
    termbuf::TermBuf,
};

/// Translate a termenu color into a crossterm color.
fn translate_color(c: Color) -> style::Color {
    match c {
        Color::Black => style::Color::Black,
        Color::DarkGrey => style::Color::DarkGrey,
        Color::Red => style::Color::Red,
        Color::DarkRed => style::Color::DarkRed,
        Color::Green => style::Color::Green,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::Yellow => style::Color::Yellow,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Blue => style::Color::Blue,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::Magenta => style::Color::Magenta,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::Cyan,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::White => style::Color::White,
        Color::Grey => style::Color::Grey,
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
        Color::AnsiValue(a) => style::Color::AnsiValue(a),
    }
}

/// Translate crossterm key modifiers into termenu modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a crossterm key event. Keys termenu has no use for map to
/// `Null`, which every widget ignores.
fn translate_key(k: cevent::KeyEvent) -> key::Key {
    key::Key {
        mods: translate_key_modifiers(k.modifiers),
        key: match k.code {
            cevent::KeyCode::Backspace => key::KeyCode::Backspace,
            cevent::KeyCode::Enter => key::KeyCode::Enter,
            cevent::KeyCode::Left => key::KeyCode::Left,
            cevent::KeyCode::Right => key::KeyCode::Right,
            cevent::KeyCode::Up => key::KeyCode::Up,
            cevent::KeyCode::Down => key::KeyCode::Down,
            cevent::KeyCode::Home => key::KeyCode::Home,
            cevent::KeyCode::End => key::KeyCode::End,
            cevent::KeyCode::PageUp => key::KeyCode::PageUp,
            cevent::KeyCode::PageDown => key::KeyCode::PageDown,
            cevent::KeyCode::Tab => key::KeyCode::Tab,
            cevent::KeyCode::BackTab => key::KeyCode::BackTab,
            cevent::KeyCode::Delete => key::KeyCode::Delete,
            cevent::KeyCode::Insert => key::KeyCode::Insert,
            cevent::KeyCode::F(x) => key::KeyCode::F(x),
            cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
            cevent::KeyCode::Esc => key::KeyCode::Esc,
            _ => key::KeyCode::Null,
        },
    }
}

/// The boxed hook type `std::panic` deals in.
type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Restores the terminal before a panic message is printed, so the
/// backtrace is readable. The previous hook comes back when the guard drops.
pub fn install_panic_hook() -> ScopeGuard<PanicHook, fn(PanicHook)> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|pi| {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            crossterm::execute!(stderr, terminal::LeaveAlternateScreen, ccursor::Show);
            terminal::disable_raw_mode();
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }
    }));
    guard(previous, panic::set_hook as fn(PanicHook))
}

/// Queues styled text onto stderr.
struct CrosstermRender<'a> {
    /// Output stream.
    fp: &'a mut Stderr,
}

impl CrosstermRender<'_> {
    /// Apply a style to subsequent output.
    fn apply_style(&mut self, s: &Style) -> io::Result<()> {
        // Reset clears everything, so colors have to come after it.
        self.fp
            .queue(style::SetAttribute(style::Attribute::Reset))?;
        self.fp
            .queue(style::SetForegroundColor(translate_color(s.fg)))?;
        self.fp
            .queue(style::SetBackgroundColor(translate_color(s.bg)))?;
        if s.attrs.bold {
            self.fp.queue(style::SetAttribute(style::Attribute::Bold))?;
        }
        if s.attrs.dim {
            self.fp.queue(style::SetAttribute(style::Attribute::Dim))?;
        }
        if s.attrs.italic {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Italic))?;
        }
        if s.attrs.underline {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Underlined))?;
        }
        if s.attrs.reverse {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl RenderBackend for CrosstermRender<'_> {
    fn style(&mut self, s: &Style) -> Result<()> {
        Ok(self.apply_style(s)?)
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.fp.queue(ccursor::MoveTo(loc.x as u16, loc.y as u16))?;
        self.fp.queue(style::Print(txt))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.fp.flush()?)
    }
}

/// A crossterm-backed terminal writing to stderr.
#[derive(Debug)]
pub struct CrosstermTerminal {
    /// Output stream.
    fp: Stderr,
    /// The last buffer drawn, for diffing.
    prev: Option<TermBuf>,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self {
            fp: io::stderr(),
            prev: None,
        }
    }
}

impl BackendControl for CrosstermTerminal {
    fn start(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.fp.execute(terminal::EnterAlternateScreen)?;
        self.fp.execute(ccursor::Hide)?;
        self.prev = None;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.fp.execute(terminal::LeaveAlternateScreen)?;
        self.fp.execute(ccursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> Result<Expanse> {
        let (w, h) = terminal::size()?;
        Ok(Expanse::new(w.into(), h.into()))
    }

    fn draw(&mut self, buf: &TermBuf) -> Result<()> {
        let mut r = CrosstermRender { fp: &mut self.fp };
        match &self.prev {
            Some(prev) => buf.diff(prev, &mut r)?,
            None => buf.render(&mut r)?,
        }
        self.prev = Some(buf.clone());
        Ok(())
    }

    fn read_key(&mut self) -> Result<key::Key> {
        loop {
            match cevent::read()? {
                cevent::Event::Key(k) if k.kind != cevent::KeyEventKind::Release => {
                    return Ok(translate_key(k));
                }
                cevent::Event::Resize(..) => {
                    // Force a full repaint on the next draw.
                    self.prev = None;
                }
                _ => {}
            }
        }
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<key::Key>> {
        if !cevent::poll(timeout)? {
            return Ok(None);
        }
        match cevent::read()? {
            cevent::Event::Key(k) if k.kind != cevent::KeyEventKind::Release => {
                Ok(Some(translate_key(k)))
            }
            _ => Ok(None),
        }
    }

    fn set_cursor(&mut self, pos: Option<Point>) -> Result<()> {
        match pos {
            Some(p) => {
                self.fp.queue(ccursor::MoveTo(p.x as u16, p.y as u16))?;
                self.fp.queue(ccursor::Show)?;
            }
            None => {
                self.fp.queue(ccursor::Hide)?;
            }
        }
        Ok(self.fp.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        let k = translate_key(cevent::KeyEvent::new(
            cevent::KeyCode::Char('d'),
            cevent::KeyModifiers::ALT,
        ));
        assert_eq!(k, key::Alt + 'd');
        let k = translate_key(cevent::KeyEvent::new(
            cevent::KeyCode::CapsLock,
            cevent::KeyModifiers::NONE,
        ));
        assert_eq!(k, key::KeyCode::Null);
    }

    #[test]
    fn colors() {
        assert_eq!(translate_color(Color::Blue), style::Color::Blue);
        assert_eq!(
            translate_color(Color::Rgb { r: 1, g: 2, b: 3 }),
            style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
