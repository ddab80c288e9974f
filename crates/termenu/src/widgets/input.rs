//! Single-line text input fields.
//!
//! A field is drawn as `label:` followed by an editable region of fixed
//! width. Editing happens on a [`FieldState`], which is a pure state machine
//! over keys; [`InputField::run`] adds the drawing and the key loop.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    event::{Key, KeyCode},
    screen::{Screen, Surface, SurfaceSpec},
    style::Slot,
};

/// Which characters a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Validator {
    /// Letters, digits and spaces.
    #[default]
    Alphanumeric,
    /// Digits.
    Numeric,
    /// Letters.
    Alphabetic,
    /// Letters, digits and `.@_-+`.
    Email,
}

impl Validator {
    /// True if `c` may be typed into a field with this validator.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Alphanumeric => c.is_alphanumeric() || c == ' ',
            Self::Numeric => c.is_ascii_digit(),
            Self::Alphabetic => c.is_alphabetic(),
            Self::Email => c.is_alphanumeric() || ".@_-+".contains(c),
        }
    }
}

/// How editing a field ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Enter was pressed; the value may be empty.
    Committed(String),
    /// Escape was pressed.
    Cancelled,
}

impl FieldOutcome {
    /// The committed value, or an empty string if the field was cancelled.
    pub fn into_value(self) -> String {
        match self {
            Self::Committed(v) => v,
            Self::Cancelled => String::new(),
        }
    }

    /// True if the field was committed.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// A key that ends an editing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    /// Enter.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Next,
    /// Shift-tab.
    Previous,
}

/// The value and cursor of a field being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Characters typed so far.
    value: Vec<char>,
    /// Cursor position in `[0, value.len()]`.
    cursor: usize,
}

impl FieldState {
    /// A state holding `value`, with the cursor at the end.
    pub fn with_value(value: &str) -> Self {
        let value: Vec<char> = value.chars().collect();
        Self {
            cursor: value.len(),
            value,
        }
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The value as displayed: every character replaced with `*` when
    /// masked.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            "*".repeat(self.value.len())
        } else {
            self.value()
        }
    }

    /// Apply an editing key. Returns the exit key if the key ends editing.
    pub(crate) fn handle(&mut self, key: Key, validator: Validator, max_len: usize) -> Option<Exit> {
        match key.key {
            KeyCode::Enter => return Some(Exit::Enter),
            KeyCode::Esc => return Some(Exit::Escape),
            KeyCode::Tab => return Some(Exit::Next),
            KeyCode::BackTab => return Some(Exit::Previous),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => {
                let typed = key.printable().filter(|c| validator.accepts(*c));
                if let Some(c) = typed {
                    if self.value.len() < max_len {
                        self.value.insert(self.cursor, c);
                        self.cursor += 1;
                    }
                }
            }
        }
        None
    }
}

/// A labelled, validated text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    /// Text drawn before the field.
    label: String,
    /// Maximum number of characters, and the width of the field.
    max_len: usize,
    /// Status line text while editing.
    help: String,
    /// Accepted characters.
    validator: Validator,
    /// Show `*` instead of the value.
    masked: bool,
}

impl InputField {
    /// An alphanumeric field.
    pub fn new(label: impl Into<String>, max_len: usize) -> Self {
        Self {
            label: label.into(),
            max_len,
            help: String::new(),
            validator: Validator::default(),
            masked: false,
        }
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Mask the value, for passwords.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The maximum length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Label width in cells.
    pub(crate) fn label_width(&self) -> u32 {
        self.label.chars().count() as u32
    }

    /// Columns from the start of the label to the start of the editable
    /// region.
    pub(crate) fn field_offset(&self) -> u32 {
        self.label_width() + 2
    }

    /// Draw the label and the current value.
    pub(crate) fn paint(
        &self,
        screen: &mut Screen,
        surface: &Surface,
        row: u32,
        col: u32,
        state: &FieldState,
    ) {
        let label_style = screen.style(Slot::Window);
        let field_style = screen.style(Slot::InputField);
        screen.draw(surface, row, col, &format!("{}:", self.label), label_style);
        screen.draw_padded(
            surface,
            row,
            col + self.field_offset(),
            self.max_len as u32,
            &state.display(self.masked),
            field_style,
        );
    }

    /// Edit `state` until an exit key arrives. The cursor is shown while
    /// editing and hidden afterwards.
    pub(crate) fn edit(
        &self,
        screen: &mut Screen,
        surface: &Surface,
        row: u32,
        col: u32,
        state: &mut FieldState,
    ) -> Result<Exit> {
        let ret = self.edit_loop(screen, surface, row, col, state);
        screen.hide_cursor();
        ret
    }

    /// The key loop behind [`edit`](Self::edit).
    fn edit_loop(
        &self,
        screen: &mut Screen,
        surface: &Surface,
        row: u32,
        col: u32,
        state: &mut FieldState,
    ) -> Result<Exit> {
        loop {
            self.paint(screen, surface, row, col, state);
            let x = col + self.field_offset() + state.cursor() as u32;
            screen.show_cursor(surface, row, x);
            let key = screen.read_key()?;
            if let Some(exit) = state.handle(key, self.validator, self.max_len) {
                return Ok(exit);
            }
        }
    }

    /// Check the configuration.
    fn check(&self) -> Result<()> {
        if self.max_len == 0 {
            return Err(Error::Invalid(format!(
                "field {:?} must accept at least one character",
                self.label
            )));
        }
        Ok(())
    }

    /// Run the field inside `surface`, with its label at local `(row, col)`.
    /// Tab and shift-tab are ignored.
    pub fn run(
        &self,
        screen: &mut Screen,
        surface: &Surface,
        row: u32,
        col: u32,
    ) -> Result<FieldOutcome> {
        self.check()?;
        screen.status(&self.help);
        let mut state = FieldState::default();
        loop {
            match self.edit(screen, surface, row, col, &mut state)? {
                Exit::Enter => {
                    debug!(label = %self.label, "field committed");
                    return Ok(FieldOutcome::Committed(state.value()));
                }
                Exit::Escape => {
                    debug!(label = %self.label, "field cancelled");
                    return Ok(FieldOutcome::Cancelled);
                }
                Exit::Next | Exit::Previous => {}
            }
        }
    }
}

/// Height of the input box.
const BOX_HEIGHT: u32 = 7;

/// Run a field in its own centered "Input Box" dialog.
pub fn input_box(screen: &mut Screen, field: &InputField) -> Result<FieldOutcome> {
    field.check()?;
    let width = field.max_len as u32 + field.label_width() + 10;
    let (row, col) = screen.centered(BOX_HEIGHT, width)?;
    let surface = screen.open(SurfaceSpec::new(BOX_HEIGHT, width, row, col).with_title("Input Box"))?;
    let ret = field.run(screen, &surface, 3, 3);
    screen.close(surface)?;
    ret
}
