//! Error types for PHOSPHOR.

use std::io;

/// Errors produced by the PHOSPHOR terminal framework.
#[derive(Debug, thiserror::Error)]
pub enum PhosphorError {
    #[error("command error: {0}")]
    Command(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PhosphorError>;
