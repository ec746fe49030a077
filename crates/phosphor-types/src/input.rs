//! Platform-agnostic key events.
//!
//! Every embedder (browser bridge, SDL shell, headless test harness) maps its
//! native keyboard input to this enum. The terminal core never sees raw
//! platform input.

use serde::{Deserialize, Serialize};

/// A single keystroke delivered to the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character typed (physical or on-screen keyboard).
    Char(char),
    /// Submit the current line.
    Enter,
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character at the cursor.
    Delete,
    /// Recall an older history entry.
    ArrowUp,
    /// Recall a newer history entry (or the in-progress draft).
    ArrowDown,
    /// Move the cursor one column left.
    ArrowLeft,
    /// Move the cursor one column right.
    ArrowRight,
    /// Move the cursor to the start of the line.
    Home,
    /// Move the cursor to the end of the line.
    End,
}
