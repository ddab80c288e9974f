//! Horizontal bar charts.
use crate::{
    error::{Error, Result},
    screen::{Screen, SurfaceSpec},
    style::Slot,
};

/// Width of the label column.
const LABEL_WIDTH: usize = 15;
/// Helper line under the chart.
const HELPER: &str = "Press any key to exit.";

/// Format one chart row: the label in a fixed column, `#` bars scaled so
/// that `max` fills `bar_width`, and the value in parentheses.
pub fn chart_row(label: &str, value: u64, max: u64, bar_width: usize) -> String {
    let len = if max == 0 {
        0
    } else {
        (bar_width as u64 * value / max) as usize
    };
    let label: String = label.chars().take(LABEL_WIDTH).collect();
    format!("{label:w$}: {} ({value})", "#".repeat(len), w = LABEL_WIDTH)
}

/// Show a bar chart of `data` and wait for a key.
pub fn bar_chart<S: AsRef<str>>(screen: &mut Screen, title: &str, data: &[(S, u64)]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::Invalid(format!("chart {title:?} has no data")));
    }
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let size = screen.size();
    let width = size.w.saturating_sub(4);
    let height = data.len() as u32 + 4;
    // Room for the border, margins, label column and the widest value.
    let fixed = 4 + LABEL_WIDTH + 2 + max.to_string().len() + 3;
    let bar_width = (width as usize).saturating_sub(fixed);

    let (row, col) = screen.centered(height, width)?;
    let surface = screen.open(SurfaceSpec::new(height, width, row, col).with_title(title))?;
    let st = surface.style();
    for (i, (label, value)) in data.iter().enumerate() {
        let line = chart_row(label.as_ref(), *value, max, bar_width);
        screen.draw(&surface, i as u32 + 1, 2, &line, st);
    }
    let helper = screen.style(Slot::Helper);
    screen.draw(&surface, height - 2, 2, HELPER, helper);
    let ret = screen.read_key();
    screen.close(surface)?;
    ret.map(|_| ())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        event::Key,
        testing::{self, buf::BufTest},
    };

    #[test]
    fn rows() {
        assert_eq!(chart_row("apples", 5, 10, 10), "apples         : ##### (5)");
        assert_eq!(chart_row("zero", 0, 0, 10), "zero           :  (0)");
        assert_eq!(
            chart_row("a very long label indeed", 10, 10, 3),
            "a very long lab: ### (10)"
        );
    }

    #[test]
    fn draws_and_closes() -> Result<()> {
        let (state, mut screen) = testing::screen(50, 10, [Key::from(' ')])?;
        let before = screen.snapshot();
        bar_chart(&mut screen, "Sales", &[("north", 20), ("south", 10)])?;
        assert_eq!(screen.snapshot(), before);
        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        // 46 columns wide: 46 - 4 - 15 - 2 - 2 - 3 leaves 20 for the bars.
        assert!(t.contains_text(&format!("north          : {} (20)", "#".repeat(20))));
        assert!(t.contains_text(&format!("south          : {} (10)", "#".repeat(10))));
        assert!(t.contains_text(HELPER));
        Ok(())
    }
}
