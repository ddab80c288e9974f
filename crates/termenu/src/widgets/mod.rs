//! Widgets. Each one borrows the [`Screen`](crate::Screen), opens its own
//! surface, runs until the user resolves it and closes the surface again.

pub mod browser;
pub mod calendar;
pub mod chart;
pub mod dialog;
pub mod files;
pub mod form;
pub mod frame;
pub mod input;
pub mod menu;
pub mod menubar;
pub mod progress;
pub mod select;
pub mod statusbar;
pub mod table;

pub use browser::TextBrowser;
pub use form::Form;
pub use input::{FieldOutcome, InputField, Validator};
pub use menu::{MenuNode, Outcome, VerticalMenu};
pub use menubar::{BarOutcome, Category, MenuBar};
pub use progress::ProgressBar;
