//! Output surface abstraction.
//!
//! The session writes raw text (including ANSI escape codes, `\x08`
//! backspaces, and `\r\n` line breaks) and the surface renders it. The core
//! never parses styling sequences; they pass through opaquely. Output
//! ordering matches call order (single-threaded, synchronous append).

use std::cell::RefCell;
use std::rc::Rc;

use phosphor_types::Result;

/// A rendering target for terminal output.
///
/// The editor simulates cursor movement with `\x08` and re-echoed characters,
/// so implementations only need append-at-cursor semantics: `\x08` moves the
/// visible cursor one column left, ordinary characters overwrite-or-append.
pub trait Surface {
    /// Append raw text at the cursor.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Erase all prior output and reset the visible origin.
    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
struct Inner {
    lines: Vec<String>,
    /// Char column into the last line.
    col: usize,
    /// Unparsed log of everything written, for pass-through assertions.
    raw: String,
    clears: usize,
}

/// Headless in-memory surface.
///
/// Interprets `\n` (new line), `\r` (column 0), and `\x08` (one column left,
/// saturating at 0); other characters overwrite the cell under the cursor or
/// append. Clones share state, so a test can keep a handle after boxing one
/// into a session.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    inner: Rc<RefCell<Inner>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        let inner = self.inner.borrow();
        if inner.lines.is_empty() {
            vec![String::new()]
        } else {
            inner.lines.clone()
        }
    }

    /// The line currently under the cursor.
    pub fn last_line(&self) -> String {
        self.lines().last().cloned().unwrap_or_default()
    }

    /// Full rendered contents joined with `\n`.
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }

    /// The unparsed write log (escape codes and control characters intact).
    pub fn raw(&self) -> String {
        self.inner.borrow().raw.clone()
    }

    /// How many times `clear()` was called.
    pub fn clear_count(&self) -> usize {
        self.inner.borrow().clears
    }
}

impl Surface for MemorySurface {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.raw.push_str(text);
        if inner.lines.is_empty() {
            inner.lines.push(String::new());
        }
        for ch in text.chars() {
            match ch {
                '\n' => {
                    inner.lines.push(String::new());
                    inner.col = 0;
                },
                '\r' => inner.col = 0,
                '\u{8}' => inner.col = inner.col.saturating_sub(1),
                _ => {
                    let col = inner.col;
                    let line = inner.lines.last_mut().unwrap();
                    let char_len = line.chars().count();
                    if col < char_len {
                        // Overwrite the cell under the cursor.
                        let byte_pos = line
                            .char_indices()
                            .nth(col)
                            .map(|(i, _)| i)
                            .unwrap_or(line.len());
                        let old_len = line[byte_pos..].chars().next().map_or(0, char::len_utf8);
                        line.replace_range(byte_pos..byte_pos + old_len, &ch.to_string());
                    } else {
                        line.push(ch);
                    }
                    inner.col += 1;
                },
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.lines.clear();
        inner.lines.push(String::new());
        inner.col = 0;
        inner.clears += 1;
        Ok(())
    }
}
