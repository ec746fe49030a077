//! ANSI stdout surface for the demo binary.

use std::io::Write;

use phosphor_term::Surface;
use phosphor_types::Result;

/// Writes straight through to stdout, flushing after every call so prompts
/// without a trailing newline appear immediately.
pub struct StdoutSurface;

impl Surface for StdoutSurface {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = std::io::stdout();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        // Erase the screen and home the cursor.
        self.write("\x1b[2J\x1b[H")
    }
}
