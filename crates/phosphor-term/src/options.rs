//! Session construction options.
//!
//! Visual settings (theme, font, geometry) are carried by the session but
//! consumed only by the rendering surface; the dispatch core reads nothing
//! here except the prompt string.

use serde::Deserialize;

/// Options accepted at session construction.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalOptions {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_cols")]
    pub cols: u16,
    #[serde(default = "default_rows")]
    pub rows: u16,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    #[serde(default)]
    pub theme: ThemeOptions,
}

/// Color theme, hex strings passed straight to the surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeOptions {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_cursor")]
    pub cursor: String,
}

fn default_prompt() -> String {
    "$ ".to_string()
}
fn default_cols() -> u16 {
    100
}
fn default_rows() -> u16 {
    38
}
fn default_font_family() -> String {
    "\"VT323\", \"Press Start 2P\", monospace".to_string()
}
fn default_font_size() -> u16 {
    14
}
fn default_background() -> String {
    "#1a1b26".to_string()
}
fn default_foreground() -> String {
    "#a9b1d6".to_string()
}
fn default_cursor() -> String {
    "#c0caf5".to_string()
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            cols: default_cols(),
            rows: default_rows(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            theme: ThemeOptions::default(),
        }
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            cursor: default_cursor(),
        }
    }
}
