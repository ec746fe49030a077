//! Shared types for the PHOSPHOR terminal.
//!
//! Holds the crate-wide error enum, platform-agnostic key events, and ANSI
//! style helpers. Every other crate in the workspace depends on this one and
//! nothing here depends on the terminal core.

pub mod error;
pub mod input;
pub mod style;

pub use error::{PhosphorError, Result};
pub use input::Key;
