//! Terminal core for PHOSPHOR.
//!
//! The terminal is a registry-based dispatch system over a line-oriented
//! input processor. Commands implement the [`Command`] trait and are
//! registered by name (and aliases). The session maintains an editable
//! command buffer with cursor movement and history recall, parses submitted
//! lines, resolves the command, and awaits `execute()`: handlers are
//! uniformly asynchronous and run strictly one at a time.
//!
//! The rendering target is abstracted behind the [`Surface`] trait, so the
//! whole core runs headless under test via [`MemorySurface`].

mod builtins;
mod clock;
mod command;
mod editor;
mod history;
mod options;
mod session;
mod surface;

/// Register the built-in commands (`help`, `clear`, `sleep`) into a registry.
pub use builtins::register_builtins;
/// Timing seam used by `sleep` and animated handlers.
pub use clock::{BlockingClock, Clock, InstantClock};
/// A single executable command trait and its help metadata.
pub use command::{ArgSpec, Command, CommandRegistry, OptSpec, Term};
/// The in-progress input line with cursor.
pub use editor::LineEditor;
/// Submitted-line history with up/down recall.
pub use history::{History, MAX_HISTORY};
/// Session construction options (consumed by the surface layer).
pub use options::{TerminalOptions, ThemeOptions};
/// One live terminal instance: dispatcher, boot sequencer, key intake.
pub use session::TerminalSession;
/// Output surface trait and headless implementation.
pub use surface::{MemorySurface, Surface};
