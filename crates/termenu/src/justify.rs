//! Fixed-width text justification.
//!
//! Words are packed greedily. Every line but the last has its slack spread
//! across the gaps between words, one space per gap from the left, so the
//! words touch both margins. The last line is left aligned.
use std::{iter, mem};

use pad::PadStr;
use textwrap::{Options, WrapAlgorithm};

use crate::error::{Error, Result};

/// Check a target width.
fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::Invalid("justification width must be positive".into()));
    }
    Ok(())
}

/// Split a word into chunks of at most `width` characters.
fn chunks(word: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = word;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(cut);
        rest = tail;
        Some(head)
    })
}

/// Join words so that they span exactly `width` columns. Lines with a single
/// word, or with more text than fits, are joined with single spaces.
fn stretch(words: &[&str], width: usize) -> String {
    let gaps = words.len().saturating_sub(1);
    if gaps == 0 {
        return words.concat();
    }
    let natural: usize = words.iter().map(|w| w.chars().count()).sum::<usize>() + gaps;
    let slack = width.saturating_sub(natural);
    let (each, extra) = (slack / gaps, slack % gaps);
    let mut out = String::with_capacity(width);
    for (i, w) in words.iter().enumerate() {
        out.push_str(w);
        if i < gaps {
            let n = 1 + each + usize::from(i < extra);
            out.extend(iter::repeat_n(' ', n));
        }
    }
    out
}

/// Wrap and justify `text` to lines of exactly `width` columns.
///
/// Leading whitespace is kept verbatim at the start of the first line and
/// the words on that line are fitted into the remaining columns. An indent
/// that leaves no room for the first word is dropped. Words longer than
/// `width` are broken at `width` columns.
pub fn justify(text: &str, width: usize) -> Result<Vec<String>> {
    check_width(width)?;
    let body = text.trim_start();
    if body.is_empty() {
        return Ok(vec![]);
    }
    let mut indent = &text[..text.len() - body.len()];
    let mut indent_len = indent.chars().count();
    if indent_len >= width {
        indent = "";
        indent_len = 0;
    }

    let mut lines: Vec<Vec<&str>> = vec![];
    let mut cur: Vec<&str> = vec![];
    let mut cur_len = 0;
    for piece in body.split_whitespace().flat_map(|w| chunks(w, width)) {
        let plen = piece.chars().count();
        // The indent gives way to a first word that would not fit beside it.
        if lines.is_empty() && cur.is_empty() && plen > width - indent_len {
            indent = "";
            indent_len = 0;
        }
        let avail = if lines.is_empty() {
            width - indent_len
        } else {
            width
        };
        let need = if cur.is_empty() {
            plen
        } else {
            cur_len + 1 + plen
        };
        if need <= avail {
            cur.push(piece);
            cur_len = need;
        } else {
            lines.push(mem::replace(&mut cur, vec![piece]));
            cur_len = plen;
        }
    }
    lines.push(cur);

    let last = lines.len() - 1;
    Ok(lines
        .iter()
        .enumerate()
        .map(|(i, words)| {
            let (prefix, avail) = if i == 0 {
                (indent, width - indent_len)
            } else {
                ("", width)
            };
            let body = if i == last {
                words.join(" ")
            } else {
                stretch(words, avail)
            };
            format!("{prefix}{body}").pad_to_width(width)
        })
        .collect())
}

/// Align a single pre-wrapped line to `width`. Leading whitespace is kept
/// and excluded from the stretch. When `last` is set the words keep single
/// spaces. Lines already wider than `width` come back with single spaces
/// and no padding.
pub fn align_line(line: &str, width: usize, last: bool) -> String {
    let body = line.trim_start();
    let lead = &line[..line.len() - body.len()];
    let words: Vec<&str> = body.split_whitespace().collect();
    let avail = width.saturating_sub(lead.chars().count());
    let aligned = if last {
        words.join(" ")
    } else {
        stretch(&words, avail)
    };
    format!("{lead}{aligned}").pad_to_width(width)
}

/// Join a paragraph's lines, re-wrap them greedily to `width` and align
/// every line but the last.
pub fn align_paragraph<S: AsRef<str>>(lines: &[S], width: usize) -> Result<Vec<String>> {
    check_width(width)?;
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let wrapped = textwrap::wrap(
        &joined,
        Options::new(width).wrap_algorithm(WrapAlgorithm::FirstFit),
    );
    let last = wrapped.len().saturating_sub(1);
    Ok(wrapped
        .iter()
        .enumerate()
        .map(|(i, l)| align_line(l, width, i == last))
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classic() -> Result<()> {
        assert_eq!(
            justify("This is an example of text justification.", 16)?,
            vec!["This    is    an", "example  of text", "justification.  "]
        );
        Ok(())
    }

    #[test]
    fn long_words_break() -> Result<()> {
        assert_eq!(
            justify("abcdefghij xy", 4)?,
            vec!["abcd", "efgh", "ij  ", "xy  "]
        );
        Ok(())
    }

    #[test]
    fn leading_whitespace() -> Result<()> {
        assert_eq!(
            justify("  hello world foo", 10)?,
            vec!["  hello   ", "world foo "]
        );
        assert_eq!(justify("  ab cd ef", 9)?, vec!["  ab   cd", "ef       "]);
        // An indent that fills the line is dropped.
        assert_eq!(justify("     ab", 3)?, vec!["ab "]);
        // So is one that leaves no room for the first word.
        assert_eq!(justify("  abcde fg", 5)?, vec!["abcde", "fg   "]);
        Ok(())
    }

    #[test]
    fn edges() {
        assert_eq!(justify("", 10), Ok(vec![]));
        assert_eq!(justify("   \n ", 10), Ok(vec![]));
        assert!(matches!(justify("x", 0), Err(Error::Invalid(_))));
        assert!(align_paragraph(&["x"], 0).is_err());
    }

    #[test]
    fn align() {
        assert_eq!(align_line("a b c", 9, false), "a   b   c");
        assert_eq!(align_line("a b  c", 9, true), "a b c    ");
        assert_eq!(align_line("  a b", 7, false), "  a   b");
        assert_eq!(align_line("single", 8, false), "single  ");
    }

    #[test]
    fn paragraph() -> Result<()> {
        let p = align_paragraph(&["the quick brown", "fox jumps over the lazy dog"], 15)?;
        assert_eq!(
            p,
            vec!["the quick brown", "fox  jumps over", "the lazy dog   "]
        );
        Ok(())
    }

    #[test]
    fn paragraph_fills_lines_greedily() -> Result<()> {
        assert_eq!(align_paragraph(&["a b c d"], 5)?, vec!["a b c", "d    "]);
        assert_eq!(
            align_paragraph(&["aaa bb", "cc d"], 6)?,
            vec!["aaa bb", "cc d  "]
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn lines_have_exact_width_and_keep_words(
            words in prop::collection::vec("[a-z]{1,15}", 1..30),
            width in 1usize..30,
        ) {
            let text = words.join(" ");
            let lines = justify(&text, width)?;
            for l in &lines {
                prop_assert_eq!(l.chars().count(), width);
            }
            let expected: Vec<&str> = words.iter().flat_map(|w| chunks(w, width)).collect();
            let actual: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn only_the_last_line_is_ragged(
            words in prop::collection::vec("[a-z]{1,8}", 1..30),
            width in 8usize..30,
        ) {
            let lines = justify(&words.join(" "), width)?;
            let (last, rest) = lines.split_last().unwrap();
            prop_assert!(!last.trim_end().contains("  "));
            for l in rest {
                if l.split_whitespace().count() > 1 {
                    prop_assert!(!l.ends_with(' '), "not stretched: {:?}", l);
                }
            }
        }
    }
}
