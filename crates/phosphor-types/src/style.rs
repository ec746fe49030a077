//! ANSI style helpers.
//!
//! The terminal core treats styled text as opaque pass-through data: these
//! helpers wrap a string in escape codes and nothing in the dispatch path
//! ever parses them. A surface that cannot render escapes may strip them.

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

fn wrap(code: &str, text: &str) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}

/// Bold text.
pub fn bold(text: &str) -> String {
    wrap("1", text)
}

/// Bold cyan, used for banners.
pub fn bold_cyan(text: &str) -> String {
    wrap("1;36", text)
}

/// Cyan text.
pub fn cyan(text: &str) -> String {
    wrap("36", text)
}

/// Green text, used for success/status lines.
pub fn green(text: &str) -> String {
    wrap("32", text)
}

/// Red text, used for error lines.
pub fn red(text: &str) -> String {
    wrap("31", text)
}

/// Yellow text, used for highlights.
pub fn yellow(text: &str) -> String {
    wrap("33", text)
}

/// Bright-black (gray) text, used for dividers and hints.
pub fn dim(text: &str) -> String {
    wrap("90", text)
}
