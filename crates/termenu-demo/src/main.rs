//! A menu-driven tour of the termenu widgets.

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use termenu::{
    Options, Screen, StylePalette,
    backend::crossterm::{CrosstermTerminal, install_panic_hook},
};
use tracing::Level;
use tracing_subscriber::fmt;

mod demos;

/// CLI flags for the demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Write logs to this file.
    #[clap(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log every key, not just widget outcomes.
    #[clap(short, long)]
    verbose: bool,

    /// Draw windows without drop shadows.
    #[clap(long)]
    no_shadow: bool,

    /// Text file for the browser demo.
    #[clap(long, value_name = "PATH")]
    text: Option<PathBuf>,

    /// Load the menu bar from a JSON file.
    #[clap(long, value_name = "PATH")]
    menu: Option<PathBuf>,
}

/// Send tracing output to `path`. The terminal belongs to the widgets.
fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let format = fmt::format()
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .without_time()
        .compact();
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::TRACE } else { Level::DEBUG })
        .with_writer(Mutex::new(file))
        .event_format(format)
        .init();
    Ok(())
}

/// Run the demo.
pub fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path, args.verbose)?;
    }
    let categories = match &args.menu {
        Some(path) => demos::load_menu(path)
            .with_context(|| format!("loading menu from {}", path.display()))?,
        None => demos::menu(),
    };
    let settings = demos::Settings { text: args.text };

    let _hook = install_panic_hook();
    let mut screen = Screen::new(
        Box::new(CrosstermTerminal::default()),
        StylePalette::default(),
        Options::default().with_shadow(!args.no_shadow),
    )?;
    let ret = demos::run(&mut screen, &categories, &settings);
    screen.finish()?;
    ret
}
