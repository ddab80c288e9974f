//! A month grid for picking a date.
use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::{
    error::Result,
    event::{Key, KeyCode},
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
};

/// Weekday header, Monday first.
const HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";
/// Helper line under the grid.
const HELPER: &str = "Arrows move, PgUp/PgDn month";
/// Columns per day cell.
const CELL: u32 = 4;
/// Week rows in the grid. Six always fit a month.
const WEEKS: u32 = 6;

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(28, |last| last.day())
}

/// The date after applying a navigation key, or `None` if the key does not
/// move the selection. Day moves stay inside the month; month moves keep
/// the day where it exists and clamp it otherwise.
pub fn step(date: NaiveDate, key: KeyCode) -> Option<NaiveDate> {
    let day = date.day();
    let last = days_in_month(date);
    match key {
        KeyCode::Left => date.with_day(day.saturating_sub(1).max(1)),
        KeyCode::Right => date.with_day((day + 1).min(last)),
        KeyCode::Up => date.with_day(day.saturating_sub(7).max(1)),
        KeyCode::Down => date.with_day((day + 7).min(last)),
        KeyCode::PageUp => date.checked_sub_months(Months::new(1)),
        KeyCode::PageDown => date.checked_add_months(Months::new(1)),
        _ => None,
    }
}

/// The `(row, col)` offset of a day within the grid, counting rows from
/// the first week of the month.
fn cell(first: NaiveDate, day: u32) -> (u32, u32) {
    let offset = first.weekday().num_days_from_monday() + day - 1;
    (offset / 7, (offset % 7) * CELL)
}

/// Draw the month containing `date`, with `date` highlighted.
fn paint(screen: &mut Screen, surface: &Surface, date: NaiveDate) {
    let window = screen.style(Slot::Window);
    let selected = screen.style(Slot::Selected);
    let first = date.with_day(1).unwrap_or(date);
    let inner = surface.width() - 2;
    screen.draw_padded(
        surface,
        1,
        1,
        inner,
        &format!("{:^w$}", first.format("%B %Y").to_string(), w = inner as usize),
        window.reversed(),
    );
    screen.draw(surface, 2, 2, HEADER, window);
    for week in 0..WEEKS {
        screen.draw_padded(surface, week + 3, 2, CELL * 7, "", window);
    }
    for day in 1..=days_in_month(date) {
        let (row, col) = cell(first, day);
        let (text, st) = if day == date.day() {
            (format!("[{day:2}]"), selected)
        } else {
            (format!(" {day:2} "), window)
        };
        screen.draw(surface, row + 3, col + 2, &text, st);
    }
}

/// Let the user pick a date, starting at `initial`. Enter returns the
/// highlighted date; Escape returns `None`.
pub fn pick_date(screen: &mut Screen, initial: NaiveDate) -> Result<Option<NaiveDate>> {
    let height = WEEKS + 6;
    let width = CELL * 7 + 4;
    let (row, col) = screen.centered(height, width)?;
    let surface = screen.open(SurfaceSpec::new(height, width, row, col).with_title("Calendar"))?;
    let helper = screen.style(Slot::Helper);
    screen.draw(&surface, height - 2, 2, HELPER, helper);
    let ret = run(screen, &surface, initial);
    screen.close(surface)?;
    if let Ok(picked) = &ret {
        debug!(?picked, "date picked");
    }
    ret
}

/// The key loop.
fn run(screen: &mut Screen, surface: &Surface, mut date: NaiveDate) -> Result<Option<NaiveDate>> {
    loop {
        paint(screen, surface, date);
        let key: Key = screen.read_key()?;
        match key.key {
            KeyCode::Enter => return Ok(Some(date)),
            KeyCode::Esc => return Ok(None),
            k => {
                if let Some(d) = step(date, k) {
                    date = d;
                }
            }
        }
    }
}
