//! Multiple choice lists.
use tracing::debug;

use crate::{
    error::{Error, Result},
    event::KeyCode,
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
};

/// Helper line under the options.
const HELPER: &str = "Space toggles, Enter confirms";

/// The checkbox marker for an option.
fn marker(checked: bool) -> &'static str {
    if checked { "[X]" } else { "[ ]" }
}

/// Let the user tick any number of `options`. Returns the chosen labels in
/// list order, or `None` if the list was abandoned with Escape.
pub fn multi_select<S: AsRef<str>>(
    screen: &mut Screen,
    title: &str,
    options: &[S],
) -> Result<Option<Vec<String>>> {
    if options.is_empty() {
        return Err(Error::Invalid(format!("selection {title:?} has no options")));
    }
    let longest = options
        .iter()
        .map(|o| o.as_ref().chars().count())
        .max()
        .unwrap_or(0) as u32;
    let height = options.len() as u32 + 4;
    let width = (longest + 10).max(HELPER.len() as u32 + 4);
    let (row, col) = screen.centered(height, width)?;
    let surface = screen.open(SurfaceSpec::new(height, width, row, col).with_title(title))?;
    let ret = choose(screen, &surface, options);
    screen.close(surface)?;
    if let Ok(chosen) = &ret {
        debug!(?chosen, "multi select done");
    }
    ret
}

/// The key loop.
fn choose<S: AsRef<str>>(
    screen: &mut Screen,
    surface: &Surface,
    options: &[S],
) -> Result<Option<Vec<String>>> {
    let n = options.len();
    let mut checked = vec![false; n];
    let mut current = 0;
    let helper = screen.style(Slot::Helper);
    screen.draw(surface, n as u32 + 2, 2, HELPER, helper);
    let inner = surface.width() - 4;
    loop {
        for (i, opt) in options.iter().enumerate() {
            let (st, _) = screen.palette().menu_row(i == current);
            let line = format!("{} {}", marker(checked[i]), opt.as_ref());
            screen.draw_padded(surface, i as u32 + 1, 2, inner, &line, st);
        }
        let key = screen.read_key()?;
        match key.key {
            KeyCode::Up => current = (current + n - 1) % n,
            KeyCode::Down => current = (current + 1) % n,
            KeyCode::Char(' ') => checked[current] = !checked[current],
            KeyCode::Enter => {
                return Ok(Some(
                    options
                        .iter()
                        .zip(&checked)
                        .filter(|(_, c)| **c)
                        .map(|(o, _)| o.as_ref().to_string())
                        .collect(),
                ));
            }
            KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}
