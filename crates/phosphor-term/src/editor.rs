//! Line editor: the in-progress input line with cursor.
//!
//! Operates purely on the command buffer and a char-index cursor, echoing
//! every edit to the surface. The surface has no random-access cursor
//! addressing, so movement is simulated: `\x08` to go left, re-echoing
//! buffered characters to go right, and tail redraws after splices.

use phosphor_types::Result;

use crate::surface::Surface;

/// The editable command buffer and cursor for one session.
///
/// Invariant: `0 <= cursor <= buffer.chars().count()` after every operation.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
    /// Cursor position as a char index.
    cursor: usize,
}

fn backspaces(n: usize) -> String {
    "\u{8}".repeat(n)
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer content, not yet submitted.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer length in chars.
    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Chars from the cursor to the end of the buffer.
    fn tail(&self) -> String {
        self.buffer.chars().skip(self.cursor).collect()
    }

    /// Splice `ch` at the cursor and advance it by one.
    ///
    /// Everything after the insertion point is redrawn and the visible
    /// cursor walked back, because the surface can only append at the cursor.
    pub fn insert_char(&mut self, ch: char, surface: &mut dyn Surface) -> Result<()> {
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.insert(byte_pos, ch);
        self.cursor += 1;

        surface.write(ch.encode_utf8(&mut [0u8; 4]))?;
        let tail = self.tail();
        if !tail.is_empty() {
            surface.write(&tail)?;
            surface.write(&backspaces(tail.chars().count()))?;
        }
        Ok(())
    }

    /// Remove the character before the cursor. No-op at column 0.
    pub fn backspace(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.remove(byte_pos);

        // One blank erases the stale trailing glyph after the shift.
        let tail = self.tail();
        surface.write("\u{8}")?;
        surface.write(&tail)?;
        surface.write(" ")?;
        surface.write(&backspaces(tail.chars().count() + 1))?;
        Ok(())
    }

    /// Remove the character at the cursor without moving it. No-op at end.
    pub fn delete_forward(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.cursor >= self.char_len() {
            return Ok(());
        }
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.remove(byte_pos);

        let tail = self.tail();
        surface.write(&tail)?;
        surface.write(" ")?;
        surface.write(&backspaces(tail.chars().count() + 1))?;
        Ok(())
    }

    pub fn move_left(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.cursor == 0 {
            return Ok(());
        }
        self.cursor -= 1;
        surface.write("\u{8}")
    }

    pub fn move_right(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.cursor >= self.char_len() {
            return Ok(());
        }
        // Re-echo the char under the cursor to walk the visible cursor right.
        let ch = self.buffer.chars().nth(self.cursor).unwrap_or(' ');
        self.cursor += 1;
        surface.write(ch.encode_utf8(&mut [0u8; 4]))
    }

    pub fn move_home(&mut self, surface: &mut dyn Surface) -> Result<()> {
        surface.write(&backspaces(self.cursor))?;
        self.cursor = 0;
        Ok(())
    }

    pub fn move_end(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let tail = self.tail();
        surface.write(&tail)?;
        self.cursor = self.char_len();
        Ok(())
    }

    /// Erase the whole visible line and write `new` in its place.
    ///
    /// Used by history recall. Cursor ends at the end of the new content.
    pub fn replace(&mut self, new: &str, surface: &mut dyn Surface) -> Result<()> {
        // Walk to the visual end first so the erase covers the full buffer.
        let tail = self.tail();
        surface.write(&tail)?;
        surface.write(&"\u{8} \u{8}".repeat(self.char_len()))?;

        self.buffer = new.to_string();
        self.cursor = self.buffer.chars().count();
        surface.write(new)
    }

    /// Take the buffer for submission, resetting the editor.
    ///
    /// Echo of the line break belongs to the dispatcher, not the editor.
    pub fn take_line(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn editor_with(text: &str, surface: &mut MemorySurface) -> LineEditor {
        let mut ed = LineEditor::new();
        for ch in text.chars() {
            ed.insert_char(ch, surface).unwrap();
        }
        ed
    }

    #[test]
    fn new_defaults() {
        let ed = LineEditor::new();
        assert!(ed.is_empty());
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn insert_appends_and_echoes() {
        let mut s = MemorySurface::new();
        let ed = editor_with("hello", &mut s);
        assert_eq!(ed.buffer(), "hello");
        assert_eq!(ed.cursor(), 5);
        assert_eq!(s.last_line(), "hello");
    }

    #[test]
    fn insert_mid_line_redraws_tail() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("ac", &mut s);
        ed.move_left(&mut s).unwrap();
        ed.insert_char('b', &mut s).unwrap();
        assert_eq!(ed.buffer(), "abc");
        assert_eq!(ed.cursor(), 2);
        assert_eq!(s.last_line(), "abc");
    }

    #[test]
    fn backspace_at_zero_is_noop() {
        let mut s = MemorySurface::new();
        let mut ed = LineEditor::new();
        ed.backspace(&mut s).unwrap();
        assert!(ed.is_empty());
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("abc", &mut s);
        ed.backspace(&mut s).unwrap();
        assert_eq!(ed.buffer(), "ab");
        assert_eq!(s.last_line().trim_end(), "ab");
    }

    #[test]
    fn backspace_mid_line_shifts_tail() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("abcd", &mut s);
        ed.move_left(&mut s).unwrap();
        ed.move_left(&mut s).unwrap();
        ed.backspace(&mut s).unwrap();
        assert_eq!(ed.buffer(), "acd");
        assert_eq!(ed.cursor(), 1);
        assert_eq!(s.last_line().trim_end(), "acd");
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("ab", &mut s);
        ed.delete_forward(&mut s).unwrap();
        assert_eq!(ed.buffer(), "ab");
        assert_eq!(ed.cursor(), 2);
    }

    #[test]
    fn delete_forward_keeps_cursor() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("abc", &mut s);
        ed.move_home(&mut s).unwrap();
        ed.delete_forward(&mut s).unwrap();
        assert_eq!(ed.buffer(), "bc");
        assert_eq!(ed.cursor(), 0);
        assert_eq!(s.last_line().trim_end(), "bc");
    }

    #[test]
    fn home_and_end() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("word", &mut s);
        ed.move_home(&mut s).unwrap();
        assert_eq!(ed.cursor(), 0);
        ed.move_end(&mut s).unwrap();
        assert_eq!(ed.cursor(), 4);
        assert_eq!(s.last_line(), "word");
    }

    #[test]
    fn move_right_at_end_is_noop() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("x", &mut s);
        ed.move_right(&mut s).unwrap();
        assert_eq!(ed.cursor(), 1);
    }

    #[test]
    fn replace_erases_visible_line() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("old text", &mut s);
        ed.replace("new", &mut s).unwrap();
        assert_eq!(ed.buffer(), "new");
        assert_eq!(ed.cursor(), 3);
        assert_eq!(s.last_line().trim_end(), "new");
    }

    #[test]
    fn replace_with_cursor_mid_line() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("abcdef", &mut s);
        ed.move_home(&mut s).unwrap();
        ed.replace("xy", &mut s).unwrap();
        assert_eq!(ed.buffer(), "xy");
        assert_eq!(s.last_line().trim_end(), "xy");
    }

    #[test]
    fn take_line_resets() {
        let mut s = MemorySurface::new();
        let mut ed = editor_with("run me", &mut s);
        let line = ed.take_line();
        assert_eq!(line, "run me");
        assert!(ed.is_empty());
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn unicode_editing() {
        let mut s = MemorySurface::new();
        let mut ed = LineEditor::new();
        ed.insert_char('\u{00E9}', &mut s).unwrap();
        ed.insert_char('\u{1F600}', &mut s).unwrap();
        assert_eq!(ed.char_len(), 2);
        ed.backspace(&mut s).unwrap();
        assert_eq!(ed.buffer(), "\u{00E9}");
        assert_eq!(ed.cursor(), 1);
    }

    #[test]
    fn cursor_bounds_hold_under_edit_storm() {
        let mut s = MemorySurface::new();
        let mut ed = LineEditor::new();
        let ops: &[fn(&mut LineEditor, &mut MemorySurface)] = &[
            |e, s| e.insert_char('a', s).unwrap(),
            |e, s| e.backspace(s).unwrap(),
            |e, s| e.delete_forward(s).unwrap(),
            |e, s| e.move_left(s).unwrap(),
            |e, s| e.move_right(s).unwrap(),
            |e, s| e.move_home(s).unwrap(),
            |e, s| e.move_end(s).unwrap(),
        ];
        // Deterministic pseudo-random walk over the op table.
        let mut seed: u32 = 0x2F6E_2B1;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let op = ops[(seed >> 16) as usize % ops.len()];
            op(&mut ed, &mut s);
            assert!(ed.cursor() <= ed.char_len(), "cursor out of bounds");
        }
    }
}
