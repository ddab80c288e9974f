//! The demo menu tree and the widget shown for each entry.
use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::Result;
use chrono::Local;
use rand::Rng;
use termenu::{
    Screen,
    widgets::{
        BarOutcome, Category, FieldOutcome, Form, InputField, MenuBar, MenuNode, ProgressBar,
        TextBrowser, Validator, calendar, chart, dialog, files,
        input::input_box,
        menu, select, table,
    },
};
use tracing::info;

/// Text browsed when no file is given.
const SAMPLE: &str = "termenu draws menus, dialogs and input fields on a \
character-cell terminal. Every widget opens its own window, waits for keys \
until it is resolved and then restores whatever it covered.

Use the arrow keys to scroll this text, Page Up and Page Down to move a page \
at a time, and Escape to go back to the menu bar.";

/// Delay between progress bar steps.
const PROGRESS_STEP: Duration = Duration::from_millis(20);

/// Settings taken from the command line.
#[derive(Debug, Default)]
pub struct Settings {
    /// File for the browser demo.
    pub text: Option<PathBuf>,
}

/// Whether the session goes on after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the menu bar.
    Continue,
    /// End the session.
    Quit,
}

/// The built-in menu bar.
pub fn menu() -> Vec<Category> {
    let leaf = |label: &str, action: &str, help: &str| {
        MenuNode::leaf(label).with_action(action).with_help(help)
    };
    vec![
        Category::new(
            "File",
            vec![
                leaf("Load", "load", "Load a file."),
                leaf("Save", "save", "Save a file."),
                leaf("Save As", "save-as", "Save a file with a new name."),
                leaf("Exit", "exit", "Exit this demo."),
            ],
        ),
        Category::new(
            "Demos",
            vec![
                leaf("Browse", "browse", "Text browsing demo."),
                MenuNode::branch(
                    "Input",
                    vec![
                        leaf("Normal", "input-normal", "Normal input demo."),
                        leaf("Password", "input-password", "Password input demo."),
                    ],
                )
                .with_help("Some input demos."),
                leaf("Bar Chart", "chart", "Bar chart."),
                leaf("Progress Bar", "progress", "A simple progress bar."),
                leaf("Forms", "forms", "Forms demo."),
                leaf("Checklist", "select", "Pick several options."),
                leaf("Calendar", "calendar", "Pick a date."),
                leaf("Table", "table", "Scroll a grid of numbers."),
            ],
        ),
        Category::new("Help", vec![leaf("About", "about", "About this app.")]),
    ]
}

/// Load a menu bar from a JSON file.
pub fn load_menu(path: &Path) -> Result<Vec<Category>> {
    let categories: Vec<Category> = serde_json::from_str(&fs::read_to_string(path)?)?;
    for c in &categories {
        menu::validate_group(&c.items)?;
    }
    Ok(categories)
}

/// Run menu bar sessions until the user quits.
pub fn run(screen: &mut Screen, categories: &[Category], settings: &Settings) -> Result<()> {
    screen.status("Press Enter or ALT+KEY to start the demo.");
    let bar = MenuBar::new(categories);
    loop {
        match bar.run(screen)? {
            BarOutcome::Selected {
                category,
                item,
                path,
            } => {
                screen.status(&format!("Option: ({} , {})", category + 1, item + 1));
                let action = menu::resolve(&categories[category].items, &path)
                    .and_then(MenuNode::action)
                    .unwrap_or_default();
                info!(action, "dispatch");
                if dispatch(screen, action, settings)? == Flow::Quit {
                    return Ok(());
                }
            }
            BarOutcome::Unmatched(_) => {}
            BarOutcome::Dismissed => {
                if dialog::confirm(screen, "Quit the demo?")? {
                    return Ok(());
                }
            }
        }
    }
}

/// Perform one menu action.
fn dispatch(screen: &mut Screen, action: &str, settings: &Settings) -> Result<Flow> {
    match action {
        "load" => {
            if let Some(path) = files::select_file(screen, Path::new("."))? {
                dialog::info(screen, &format!("Loaded {}", path.display()))?;
            }
        }
        "save" => dialog::notify(screen, "Saved.", Duration::from_secs(1))?,
        "save-as" => {
            let field = InputField::new("File", 30).with_help("Name of the file to save.");
            if let FieldOutcome::Committed(name) = input_box(screen, &field)? {
                dialog::notify(screen, &format!("Saved as {name}."), Duration::from_secs(1))?;
            }
        }
        "exit" => {
            if dialog::confirm(screen, "Really exit?")? {
                return Ok(Flow::Quit);
            }
        }
        "browse" => browse(screen, settings.text.as_deref())?,
        "input-normal" => ask(screen, &InputField::new("Name", 40).with_help("Enter your name"))?,
        "input-password" => ask(
            screen,
            &InputField::new("Password", 40)
                .with_help("Type your most important password =)")
                .masked(),
        )?,
        "chart" => {
            let mut rng = rand::rng();
            let data: Vec<(String, u64)> = ["A", "B", "C", "D", "E"]
                .iter()
                .map(|l| (l.to_string(), rng.random_range(1..=50)))
                .collect();
            chart::bar_chart(screen, "Bar Chart", &data)?;
        }
        "progress" => progress(screen)?,
        "forms" => {
            let form = Form::new("Form demo")
                .with_field(InputField::new("Name", 20).with_help("Enter your name"))
                .with_field(
                    InputField::new("Age", 3)
                        .with_help("Enter your age")
                        .with_validator(Validator::Numeric),
                )
                .with_field(
                    InputField::new("Email", 30)
                        .with_help("Enter your email")
                        .with_validator(Validator::Email),
                );
            if let Some(values) = form.run(screen)? {
                dialog::info(screen, &values.join(", "))?;
            }
        }
        "select" => {
            let options = ["Cheese", "Olives", "Peppers", "Mushrooms"];
            if let Some(chosen) = select::multi_select(screen, "Toppings", &options)? {
                dialog::info(screen, &format!("{} chosen", chosen.len()))?;
            }
        }
        "calendar" => {
            if let Some(date) = calendar::pick_date(screen, Local::now().date_naive())? {
                dialog::info(screen, &date.format("%A %-d %B %Y").to_string())?;
            }
        }
        "table" => {
            let mut rng = rand::rng();
            let data: Vec<Vec<String>> = (0..40)
                .map(|r| {
                    (0..8)
                        .map(|c| format!("r{r}c{c}: {}", rng.random_range(0..1000)))
                        .collect()
                })
                .collect();
            table::view_table(screen, "Table", &data)?;
        }
        "about" => dialog::info(screen, "Demo for the termenu widgets.")?,
        _ => dialog::info(screen, ":: Men at work ::")?,
    }
    Ok(Flow::Continue)
}

/// Run a field in an input box and echo what was typed.
fn ask(screen: &mut Screen, field: &InputField) -> Result<()> {
    let msg = match input_box(screen, field)? {
        FieldOutcome::Committed(v) => format!("You typed {v:?}"),
        FieldOutcome::Cancelled => "Cancelled.".to_string(),
    };
    dialog::info(screen, &msg)?;
    Ok(())
}

/// Browse `path`, or the sample text when there is none.
fn browse(screen: &mut Screen, path: Option<&Path>) -> Result<()> {
    let text = match path {
        Some(p) => match fs::read_to_string(p) {
            Ok(t) => t,
            Err(_) => {
                dialog::error(screen, &format!("File '{}' not found", p.display()))?;
                return Ok(());
            }
        },
        None => SAMPLE.to_string(),
    };
    let size = screen.size();
    let width = size.w.saturating_sub(10).min(70);
    let height = size.h.saturating_sub(8).max(3);
    TextBrowser::from_paragraphs("Browsing demo", &text, width, height)?.run(screen)?;
    Ok(())
}

/// Animate a progress bar from empty to full.
fn progress(screen: &mut Screen) -> Result<()> {
    let mut bar = ProgressBar::create(screen, 100, "Progress Bar")?;
    for i in 0..=100 {
        bar.update(screen, i);
        bar.present(screen)?;
        thread::sleep(PROGRESS_STEP);
    }
    bar.close(screen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use termenu::{
        event::{Key, KeyCode},
        testing,
    };

    use super::*;

    #[test]
    fn builtin_menu_is_valid() -> Result<()> {
        for c in menu() {
            menu::validate_group(&c.items)?;
        }
        let labels: Vec<String> = menu().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["File", "Demos", "Help"]);
        Ok(())
    }

    #[test]
    fn about_then_exit() -> Result<()> {
        let keys = [
            Key::from('H'),
            KeyCode::Enter.into(),
            Key::from(' '),
            Key::from('F'),
            KeyCode::Up.into(),
            KeyCode::Enter.into(),
            Key::from('y'),
        ];
        let (state, mut screen) = testing::screen(80, 24, keys)?;
        run(&mut screen, &menu(), &Settings::default())?;
        assert_eq!(screen.depth(), 0);
        assert!(state.lock().unwrap().keys.is_empty());
        Ok(())
    }

    #[test]
    fn missing_text_file_is_reported() -> Result<()> {
        let (state, mut screen) = testing::screen(80, 24, [Key::from(' ')])?;
        browse(&mut screen, Some(Path::new("/no/such/file.txt")))?;
        let st = state.lock().unwrap();
        let t = testing::buf::BufTest::new(st.last.as_ref().unwrap());
        assert!(t.contains_text("File '/no/such/file.txt' not found"));
        Ok(())
    }

    #[test]
    fn menu_files_load() -> Result<()> {
        let json = serde_json::to_string(&menu())?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("menu.json");
        fs::write(&path, json)?;
        assert_eq!(load_menu(&path)?, menu());
        Ok(())
    }

    #[test]
    fn long_missing_path_is_reported() -> Result<()> {
        let path = PathBuf::from(format!("/{}", "d".repeat(79)));
        let (state, mut screen) = testing::screen(80, 24, [Key::from(' ')])?;
        browse(&mut screen, Some(&path))?;
        assert_eq!(screen.depth(), 0);
        let st = state.lock().unwrap();
        let t = testing::buf::BufTest::new(st.last.as_ref().unwrap());
        assert!(t.contains_text("File '/ddd"));
        assert!(t.contains_text("[ Error Window ]"));
        Ok(())
    }
}
