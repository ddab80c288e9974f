//! Picking a file by walking the directory tree.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    event::KeyCode,
    screen::{Screen, Surface, SurfaceSpec},
    widgets::dialog,
};

/// Narrowest listing window.
const MIN_WIDTH: u32 = 30;
/// Label of the parent directory entry.
const PARENT: &str = "..";

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// File name within the directory.
    name: String,
    /// Whether the entry can be entered.
    is_dir: bool,
}

impl Entry {
    /// The text shown for the entry. Directories carry a trailing slash.
    fn label(&self) -> String {
        if self.is_dir && self.name != PARENT {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// What the user did with one listing.
#[derive(Debug)]
enum Pick {
    /// Move to another directory.
    Dir(PathBuf),
    /// A file was chosen.
    File(PathBuf),
    /// The picker was abandoned.
    Cancel,
}

/// Read `dir`: the parent entry first, then directories, then files, each
/// group sorted by name.
fn list(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut dirs = vec![];
    let mut files = vec![];
    for ent in fs::read_dir(dir)? {
        let ent = ent?;
        let name = ent.file_name().to_string_lossy().into_owned();
        if ent.file_type()?.is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort();
    files.sort();
    let mut entries = vec![Entry {
        name: PARENT.into(),
        is_dir: true,
    }];
    entries.extend(dirs.into_iter().map(|name| Entry { name, is_dir: true }));
    entries.extend(files.into_iter().map(|name| Entry { name, is_dir: false }));
    Ok(entries)
}

/// The parent of `dir`, or `dir` itself at the root.
fn parent(dir: &Path) -> PathBuf {
    dir.parent().map_or_else(|| dir.to_path_buf(), Path::to_path_buf)
}

/// Let the user choose a file, starting in `start`. Returns `None` if the
/// picker is abandoned with Escape.
pub fn select_file(screen: &mut Screen, start: &Path) -> Result<Option<PathBuf>> {
    let unlisted =
        |p: &Path, e: io::Error| Error::Invalid(format!("cannot list {}: {e}", p.display()));
    let mut dir = fs::canonicalize(start).map_err(|e| unlisted(start, e))?;
    let mut entries = list(&dir).map_err(|e| unlisted(&dir, e))?;
    loop {
        match show(screen, &dir, &entries)? {
            Pick::Cancel => return Ok(None),
            Pick::File(path) => {
                debug!(path = %path.display(), "file selected");
                return Ok(Some(path));
            }
            Pick::Dir(next) => match list(&next) {
                Ok(e) => {
                    dir = next;
                    entries = e;
                }
                Err(e) => {
                    warn!(dir = %next.display(), "unreadable directory: {e}");
                    dialog::error(screen, &format!("cannot list {}: {e}", next.display()))?;
                }
            },
        }
    }
}

/// Open a window for one listing and run it.
fn show(screen: &mut Screen, dir: &Path, entries: &[Entry]) -> Result<Pick> {
    let size = screen.size();
    let longest = entries
        .iter()
        .map(|e| e.label().chars().count())
        .max()
        .unwrap_or(0) as u32;
    let height = (entries.len() as u32 + 2).min(size.h.saturating_sub(2)).max(3);
    let width = (longest + 4).max(MIN_WIDTH).min(size.w);
    let title: String = dir
        .file_name()
        .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned())
        .chars()
        .take(width.saturating_sub(6) as usize)
        .collect();
    let (row, col) = screen.centered(height, width)?;
    let surface = screen.open(SurfaceSpec::new(height, width, row, col).with_title(title))?;
    screen.status(&dir.display().to_string());
    let ret = navigate(screen, &surface, dir, entries);
    screen.close(surface)?;
    ret
}

/// The key loop for one listing.
fn navigate(
    screen: &mut Screen,
    surface: &Surface,
    dir: &Path,
    entries: &[Entry],
) -> Result<Pick> {
    let visible = surface.height().saturating_sub(2) as usize;
    let inner = surface.width().saturating_sub(2);
    let last = entries.len().saturating_sub(1);
    let mut highlight = 0;
    let mut top = 0;
    loop {
        if highlight < top {
            top = highlight;
        } else if highlight >= top + visible {
            top = highlight + 1 - visible;
        }
        for i in 0..visible {
            let idx = top + i;
            let (st, _) = screen.palette().menu_row(idx == highlight);
            let label = entries.get(idx).map(Entry::label).unwrap_or_default();
            screen.draw_padded(surface, i as u32 + 1, 1, inner, &format!(" {label}"), st);
        }
        let key = screen.read_key()?;
        match key.key {
            KeyCode::Up => highlight = highlight.saturating_sub(1),
            KeyCode::Down => highlight = (highlight + 1).min(last),
            KeyCode::Left | KeyCode::Backspace => return Ok(Pick::Dir(parent(dir))),
            KeyCode::Esc => return Ok(Pick::Cancel),
            KeyCode::Enter => {
                let entry = &entries[highlight];
                return Ok(if entry.name == PARENT {
                    Pick::Dir(parent(dir))
                } else if entry.is_dir {
                    Pick::Dir(dir.join(&entry.name))
                } else {
                    Pick::File(dir.join(&entry.name))
                });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        event::Key,
        testing::{self, buf::BufTest},
    };

    fn tree() -> io::Result<tempfile::TempDir> {
        let tmp = tempfile::tempdir()?;
        fs::write(tmp.path().join("b.txt"), "b")?;
        fs::write(tmp.path().join("a.txt"), "a")?;
        fs::create_dir(tmp.path().join("sub"))?;
        fs::write(tmp.path().join("sub").join("inner.txt"), "i")?;
        Ok(tmp)
    }

    #[test]
    fn listing_order() -> io::Result<()> {
        let tmp = tree()?;
        let labels: Vec<String> = list(tmp.path())?.iter().map(Entry::label).collect();
        assert_eq!(labels, vec!["..", "sub/", "a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn enters_directories() -> Result<()> {
        let tmp = tree()?;
        let root = fs::canonicalize(tmp.path())?;
        let keys = [
            KeyCode::Down.into(),
            KeyCode::Enter.into(),
            KeyCode::Down.into(),
            KeyCode::Enter.into(),
        ];
        let (state, mut screen) = testing::screen(40, 12, keys)?;
        let before = screen.snapshot();
        let got = select_file(&mut screen, tmp.path())?;
        assert_eq!(got, Some(root.join("sub").join("inner.txt")));
        assert_eq!(screen.snapshot().line(0), before.line(0));
        assert_eq!(screen.depth(), 0);

        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        assert!(t.contains_text(" inner.txt"));
        assert!(t.contains_text("[ sub ]"));
        Ok(())
    }

    #[test]
    fn back_to_parent() -> Result<()> {
        let tmp = tree()?;
        let root = fs::canonicalize(tmp.path())?;
        let keys = [
            KeyCode::Down.into(),
            KeyCode::Enter.into(),
            KeyCode::Left.into(),
            KeyCode::Down.into(),
            KeyCode::Down.into(),
            KeyCode::Enter.into(),
        ];
        let (_, mut screen) = testing::screen(40, 12, keys)?;
        assert_eq!(select_file(&mut screen, tmp.path())?, Some(root.join("a.txt")));
        Ok(())
    }

    #[test]
    fn escape_and_missing_start() -> Result<()> {
        let tmp = tree()?;
        let (_, mut screen) = testing::screen(40, 12, [KeyCode::Esc.into()])?;
        assert_eq!(select_file(&mut screen, tmp.path())?, None);
        assert!(matches!(
            select_file(&mut screen, &tmp.path().join("nope")),
            Err(Error::Invalid(_))
        ));
        Ok(())
    }

    #[test]
    fn long_listings_scroll() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        for i in 0..20 {
            fs::write(tmp.path().join(format!("f{i:02}")), "")?;
        }
        let root = fs::canonicalize(tmp.path())?;
        let mut keys = vec![Key::from(KeyCode::Down); 15];
        keys.push(KeyCode::Enter.into());
        let (state, mut screen) = testing::screen(40, 12, keys)?;
        assert_eq!(select_file(&mut screen, tmp.path())?, Some(root.join("f14")));
        let st = state.lock().unwrap();
        let t = BufTest::new(st.last.as_ref().unwrap());
        assert!(!t.contains_text(" .."));
        Ok(())
    }
}
