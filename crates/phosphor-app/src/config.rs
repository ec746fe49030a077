//! Application configuration, loaded from an optional `phosphor.toml`.

use std::path::{Path, PathBuf};

use phosphor_term::TerminalOptions;
use phosphor_types::{PhosphorError, Result};
use serde::Deserialize;

/// Top-level app config. Every field falls back to its default, so an empty
/// file and a missing file behave the same.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub terminal: TerminalOptions,
    /// Path to a profile TOML; the bundled sample is used when absent.
    pub profile: Option<PathBuf>,
    /// Narrow-layout rendering for small screens.
    pub compact: bool,
}

impl AppConfig {
    /// Load from `path`, or return defaults when no file exists there.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| PhosphorError::Config(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/phosphor.toml")).unwrap();
        assert_eq!(config.terminal.prompt, "$ ");
        assert!(config.profile.is_none());
        assert!(!config.compact);
    }

    #[test]
    fn empty_text_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.terminal.cols, 100);
        assert_eq!(config.terminal.rows, 38);
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: AppConfig = toml::from_str(
            r#"
compact = true

[terminal]
prompt = "> "
"#,
        )
        .unwrap();
        assert!(config.compact);
        assert_eq!(config.terminal.prompt, "> ");
        assert_eq!(config.terminal.theme.background, "#1a1b26");
    }
}
