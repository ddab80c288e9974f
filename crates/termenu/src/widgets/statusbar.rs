//! Status line formatting.
//!
//! The status line occupies the last row of the screen. Text handed to it
//! often comes straight from key events, so control characters are spelled
//! out rather than sent to the terminal.

/// Build a status line: `prefix` followed by `text`, with carriage returns
/// and newlines shown as `>ENTER<` and other control characters as `<0xNN>`.
pub fn render(prefix: &str, text: &str) -> String {
    let mut line = String::with_capacity(prefix.len() + text.len());
    line.push_str(prefix);
    for c in text.chars() {
        match c {
            '\r' | '\n' => line.push_str(">ENTER<"),
            c if c.is_control() => line.push_str(&format!("<0x{:02X}>", c as u32)),
            c => line.push(c),
        }
    }
    line
}
