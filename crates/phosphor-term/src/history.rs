//! History navigator: recall of previously submitted lines.
//!
//! A small state machine over the browse offset: `None` means live editing,
//! `Some(k)` means browsing `k` entries back from the most recent. Entering
//! browse mode snapshots the in-progress draft; returning to live restores
//! it. Loading an entry goes through [`LineEditor::replace`] so the visible
//! line always matches the buffer.

use phosphor_types::Result;

use crate::editor::LineEditor;
use crate::surface::Surface;

/// Maximum number of history entries to retain.
pub const MAX_HISTORY: usize = 100;

/// Submitted-line history with up/down recall.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// Offset counting back from the most recent entry; `None` = live.
    index: Option<usize>,
    /// Draft snapshotted when browsing begins.
    draft: String,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    /// Record a submitted line (raw, pre-trim) and return to live state.
    ///
    /// Whitespace-only lines are never recorded.
    pub fn record(&mut self, line: &str) {
        self.index = None;
        self.draft.clear();
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    /// Step to an older entry (ArrowUp). No-op at the oldest.
    pub fn recall_older(
        &mut self,
        editor: &mut LineEditor,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let next = match self.index {
            None => {
                self.draft = editor.buffer().to_string();
                0
            },
            Some(k) if k + 1 < self.entries.len() => k + 1,
            Some(_) => return Ok(()),
        };
        self.index = Some(next);
        let entry = self.entries[self.entries.len() - 1 - next].clone();
        editor.replace(&entry, surface)
    }

    /// Step to a newer entry (ArrowDown), restoring the draft at the end.
    pub fn recall_newer(
        &mut self,
        editor: &mut LineEditor,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        match self.index {
            None => Ok(()),
            Some(0) => {
                self.index = None;
                let draft = std::mem::take(&mut self.draft);
                editor.replace(&draft, surface)
            },
            Some(k) => {
                self.index = Some(k - 1);
                let entry = self.entries[self.entries.len() - 1 - (k - 1)].clone();
                editor.replace(&entry, surface)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn setup(lines: &[&str]) -> (History, LineEditor, MemorySurface) {
        let mut hist = History::new();
        for line in lines {
            hist.record(line);
        }
        (hist, LineEditor::new(), MemorySurface::new())
    }

    #[test]
    fn starts_live() {
        let hist = History::new();
        assert!(!hist.is_browsing());
        assert!(hist.entries().is_empty());
    }

    #[test]
    fn record_keeps_raw_line() {
        let mut hist = History::new();
        hist.record("  help  ");
        assert_eq!(hist.entries(), ["  help  "]);
    }

    #[test]
    fn record_skips_whitespace_only() {
        let mut hist = History::new();
        hist.record("   \t ");
        assert!(hist.entries().is_empty());
    }

    #[test]
    fn record_resets_browsing() {
        let (mut hist, mut ed, mut s) = setup(&["one", "two"]);
        hist.recall_older(&mut ed, &mut s).unwrap();
        assert!(hist.is_browsing());
        hist.record("three");
        assert!(!hist.is_browsing());
    }

    #[test]
    fn recall_older_loads_most_recent_first() {
        let (mut hist, mut ed, mut s) = setup(&["first", "second"]);
        hist.recall_older(&mut ed, &mut s).unwrap();
        assert_eq!(ed.buffer(), "second");
        hist.recall_older(&mut ed, &mut s).unwrap();
        assert_eq!(ed.buffer(), "first");
    }

    #[test]
    fn recall_older_stops_at_oldest() {
        let (mut hist, mut ed, mut s) = setup(&["only"]);
        hist.recall_older(&mut ed, &mut s).unwrap();
        hist.recall_older(&mut ed, &mut s).unwrap();
        assert_eq!(ed.buffer(), "only");
        assert!(hist.is_browsing());
    }

    #[test]
    fn recall_older_with_empty_history_is_noop() {
        let (mut hist, mut ed, mut s) = setup(&[]);
        hist.recall_older(&mut ed, &mut s).unwrap();
        assert!(!hist.is_browsing());
        assert!(ed.is_empty());
    }

    #[test]
    fn recall_newer_when_live_is_noop() {
        let (mut hist, mut ed, mut s) = setup(&["cmd"]);
        hist.recall_newer(&mut ed, &mut s).unwrap();
        assert!(ed.is_empty());
    }

    #[test]
    fn round_trip_restores_draft() {
        let (mut hist, mut ed, mut s) = setup(&["alpha", "beta", "gamma"]);
        for ch in "draft".chars() {
            ed.insert_char(ch, &mut s).unwrap();
        }
        for _ in 0..3 {
            hist.recall_older(&mut ed, &mut s).unwrap();
        }
        assert_eq!(ed.buffer(), "alpha");
        for _ in 0..3 {
            hist.recall_newer(&mut ed, &mut s).unwrap();
        }
        assert_eq!(ed.buffer(), "draft");
        assert!(!hist.is_browsing());
    }

    #[test]
    fn draft_restored_through_visible_line() {
        let (mut hist, mut ed, mut s) = setup(&["longer than draft"]);
        for ch in "hi".chars() {
            ed.insert_char(ch, &mut s).unwrap();
        }
        hist.recall_older(&mut ed, &mut s).unwrap();
        hist.recall_newer(&mut ed, &mut s).unwrap();
        assert_eq!(ed.buffer(), "hi");
        assert_eq!(s.last_line().trim_end(), "hi");
    }

    #[test]
    fn capped_at_max_history() {
        let mut hist = History::new();
        for i in 0..(MAX_HISTORY + 10) {
            hist.record(&format!("cmd {i}"));
        }
        assert_eq!(hist.entries().len(), MAX_HISTORY);
        assert_eq!(hist.entries()[0], "cmd 10");
    }
}
