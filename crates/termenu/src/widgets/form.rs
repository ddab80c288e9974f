//! A dialog holding several input fields.
use tracing::debug;

use crate::{
    error::{Error, Result},
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
    widgets::input::{Exit, FieldState, InputField},
};

/// Helper line at the foot of the form.
const HELPER: &str = "<TAB> Next /// <ENTER> Accept /// <ESC> Cancel";
/// Left margin before the longest label.
const MARGIN: u32 = 3;

/// A sequence of fields edited in one dialog. Enter and Tab move to the
/// next field, shift-tab to the previous one. Enter on the last field
/// commits every value; Escape abandons the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Dialog title.
    title: String,
    /// Fields, top to bottom.
    fields: Vec<InputField>,
}

impl Form {
    /// An empty form.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: vec![],
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }

    /// The fields.
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Widest label.
    fn label_width(&self) -> u32 {
        self.fields.iter().map(InputField::label_width).max().unwrap_or(0)
    }

    /// The dialog size, as `(height, width)`.
    fn dimensions(&self) -> (u32, u32) {
        let field = self.fields.iter().map(InputField::max_len).max().unwrap_or(0) as u32;
        let content = MARGIN * 2 + self.label_width() + 2 + field;
        let helper = HELPER.chars().count() as u32 + 4;
        (self.fields.len() as u32 * 2 + 4, content.max(helper))
    }

    /// Where field `i` is drawn, as local `(row, col)`. Labels are right
    /// aligned so the editable regions line up.
    fn position(&self, i: usize) -> (u32, u32) {
        let label = self.fields[i].label_width();
        (i as u32 * 2 + 2, MARGIN + self.label_width() - label)
    }

    /// Run the form. Returns the values in field order, or `None` if it was
    /// cancelled.
    pub fn run(&self, screen: &mut Screen) -> Result<Option<Vec<String>>> {
        if self.fields.is_empty() {
            return Err(Error::Invalid(format!("form {:?} has no fields", self.title)));
        }
        if let Some(f) = self.fields.iter().find(|f| f.max_len() == 0) {
            return Err(Error::Invalid(format!(
                "field {:?} must accept at least one character",
                f.label()
            )));
        }
        let (height, width) = self.dimensions();
        let (row, col) = screen.centered(height, width)?;
        let surface =
            screen.open(SurfaceSpec::new(height, width, row, col).with_title(self.title.as_str()))?;
        let ret = self.navigate(screen, &surface);
        screen.close(surface)?;
        debug!(title = %self.title, committed = matches!(ret, Ok(Some(_))), "form done");
        ret
    }

    /// Move between fields until the form is committed or cancelled.
    fn navigate(&self, screen: &mut Screen, surface: &Surface) -> Result<Option<Vec<String>>> {
        let n = self.fields.len();
        let mut states = vec![FieldState::default(); n];
        for (i, (f, st)) in self.fields.iter().zip(&states).enumerate() {
            let (row, col) = self.position(i);
            f.paint(screen, surface, row, col, st);
        }
        let helper = screen.style(Slot::Helper);
        let inner = surface.width().saturating_sub(2);
        screen.draw_padded(
            surface,
            surface.height() - 2,
            1,
            inner,
            &format!("{HELPER:^w$}", w = inner as usize),
            helper,
        );

        let mut current = 0;
        loop {
            let field = &self.fields[current];
            screen.status(field.help());
            let (row, col) = self.position(current);
            match field.edit(screen, surface, row, col, &mut states[current])? {
                Exit::Enter if current == n - 1 => {
                    return Ok(Some(states.iter().map(FieldState::value).collect()));
                }
                Exit::Enter | Exit::Next => current = (current + 1) % n,
                Exit::Previous => current = (current + n - 1) % n,
                Exit::Escape => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        event::{Key, KeyCode},
        testing::{self, buf::BufTest},
        widgets::input::Validator,
    };

    fn form() -> Form {
        Form::new("Account")
            .with_field(InputField::new("Name", 10))
            .with_field(InputField::new("Age", 3).with_validator(Validator::Numeric))
    }

    #[test]
    fn fill_and_commit() -> Result<()> {
        let mut keys = testing::typed("bob");
        keys.push(KeyCode::Enter.into());
        keys.extend(testing::typed("4x2"));
        // Back to the name, append, then forward twice to commit.
        keys.push(KeyCode::BackTab.into());
        keys.push(Key::from('s'));
        keys.push(KeyCode::Tab.into());
        keys.push(KeyCode::Enter.into());
        let (state, mut screen) = testing::screen(60, 16, keys)?;
        let before = screen.buf().lines()[..15].to_vec();
        assert_eq!(
            form().run(&mut screen)?,
            Some(vec!["bobs".to_string(), "42".to_string()])
        );
        assert_eq!(screen.buf().lines()[..15], before[..]);

        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        assert!(t.contains_text("[ Account ]"));
        assert!(t.contains_text("Name: bobs"));
        assert!(t.contains_text(" Age: 42"));
        assert!(t.contains_text("<TAB> Next /// <ENTER> Accept /// <ESC> Cancel"));
        Ok(())
    }

    #[test]
    fn escape_cancels() -> Result<()> {
        let mut keys = testing::typed("bob");
        keys.push(KeyCode::Tab.into());
        keys.push(KeyCode::Esc.into());
        let (_, mut screen) = testing::screen(60, 16, keys)?;
        assert_eq!(form().run(&mut screen)?, None);
        assert_eq!(screen.depth(), 0);
        Ok(())
    }

    #[test]
    fn empty_forms_are_rejected() -> Result<()> {
        let (_, mut screen) = testing::screen(60, 16, [])?;
        assert!(matches!(Form::new("x").run(&mut screen), Err(Error::Invalid(_))));
        let f = Form::new("x").with_field(InputField::new("a", 0));
        assert!(matches!(f.run(&mut screen), Err(Error::Invalid(_))));
        Ok(())
    }
}
