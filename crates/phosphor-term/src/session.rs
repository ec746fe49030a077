//! Terminal session: routes keys to the editor, history, and dispatcher.
//!
//! A session owns the registry, the line editor, the history ring, and an
//! optional mounted surface. Keys arrive one at a time and are fully
//! processed before the next one is accepted; a pending command handler
//! holds `&mut self`, so input cannot interleave with dispatch.

use phosphor_types::{Key, PhosphorError, Result, style};

use crate::clock::{BlockingClock, Clock};
use crate::command::{CommandRegistry, Term};
use crate::editor::LineEditor;
use crate::history::History;
use crate::options::TerminalOptions;
use crate::surface::Surface;

/// One interactive terminal session.
pub struct TerminalSession {
    options: TerminalOptions,
    registry: CommandRegistry,
    editor: LineEditor,
    history: History,
    surface: Option<Box<dyn Surface>>,
    clock: Box<dyn Clock>,
    boot_commands: Vec<String>,
    initialized: bool,
    on_shutdown: Option<Box<dyn FnMut()>>,
}

impl TerminalSession {
    /// Create a session that really sleeps when commands ask to.
    pub fn new(options: TerminalOptions) -> Self {
        Self::with_clock(options, Box::new(BlockingClock))
    }

    /// Create a session with an explicit clock implementation.
    pub fn with_clock(options: TerminalOptions, clock: Box<dyn Clock>) -> Self {
        Self {
            options,
            registry: CommandRegistry::new(),
            editor: LineEditor::new(),
            history: History::new(),
            surface: None,
            clock,
            boot_commands: Vec::new(),
            initialized: false,
            on_shutdown: None,
        }
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// The in-progress input line.
    pub fn buffer(&self) -> &str {
        self.editor.buffer()
    }

    /// Cursor position within the input line, as a char index.
    pub fn cursor(&self) -> usize {
        self.editor.cursor()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// True once the boot sequence has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Replace the boot command list. Takes effect on the first `mount`.
    pub fn set_boot_sequence(&mut self, steps: Vec<String>) {
        self.boot_commands = steps;
    }

    /// Install the callback invoked when a command requests shutdown.
    pub fn set_shutdown_handler(&mut self, handler: Box<dyn FnMut()>) {
        self.on_shutdown = Some(handler);
    }

    /// Attach a surface and, on first mount, run the boot sequence.
    ///
    /// Boot steps share the interactive dispatch path but skip history
    /// recording; the prompt is drawn once, after the whole list. A failed
    /// step is reported and the sequence continues.
    pub async fn mount(&mut self, surface: Box<dyn Surface>) -> Result<()> {
        self.surface = Some(surface);
        if !self.initialized {
            log::info!("running {} boot steps", self.boot_commands.len());
            let steps = std::mem::take(&mut self.boot_commands);
            for step in &steps {
                self.dispatch_line(step, false).await?;
            }
            self.boot_commands = steps;
            self.initialized = true;
        }
        self.draw_prompt()
    }

    /// Detach the surface. Registry, history, and options survive.
    pub fn dispose(&mut self) {
        self.surface = None;
    }

    /// Process one keystroke. Keys before `mount` are dropped.
    pub async fn key(&mut self, key: Key) -> Result<()> {
        let Some(surface) = self.surface.as_deref_mut() else {
            log::trace!("ignoring {key:?} before mount");
            return Ok(());
        };
        match key {
            // Control characters never reach the buffer.
            Key::Char(ch) if ch.is_control() => Ok(()),
            Key::Char(ch) => self.editor.insert_char(ch, surface),
            Key::Backspace => self.editor.backspace(surface),
            Key::Delete => self.editor.delete_forward(surface),
            Key::ArrowLeft => self.editor.move_left(surface),
            Key::ArrowRight => self.editor.move_right(surface),
            Key::Home => self.editor.move_home(surface),
            Key::End => self.editor.move_end(surface),
            Key::ArrowUp => self.history.recall_older(&mut self.editor, surface),
            Key::ArrowDown => self.history.recall_newer(&mut self.editor, surface),
            Key::Enter => self.submit().await,
        }
    }

    /// Feed each char of `text` as a keystroke.
    pub async fn feed_str(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.key(Key::Char(ch)).await?;
        }
        Ok(())
    }

    /// Submit the current buffer, as if Enter were pressed.
    pub async fn submit_line(&mut self) -> Result<()> {
        self.key(Key::Enter).await
    }

    async fn submit(&mut self) -> Result<()> {
        let line = self.editor.take_line();
        self.surface_mut()?.write("\r\n")?;
        self.history.record(&line);
        self.dispatch_line(&line, true).await
    }

    /// Tokenize and run one line. `interactive` draws the prompt afterward.
    ///
    /// The first whitespace-separated token names the command and is matched
    /// case-insensitively; the rest pass through verbatim as arguments.
    /// Handler errors are reported on the surface and never end the session.
    async fn dispatch_line(&mut self, line: &str, interactive: bool) -> Result<()> {
        let mut tokens = line.split_whitespace();
        if let Some(first) = tokens.next() {
            let token = first.to_ascii_lowercase();
            let args: Vec<String> = tokens.map(str::to_string).collect();
            match self.registry.resolve(&token) {
                Some(cmd) => {
                    let surface = self
                        .surface
                        .as_deref_mut()
                        .ok_or_else(Self::not_mounted)?;
                    let mut term = Term::new(
                        surface,
                        &self.registry,
                        self.clock.as_ref(),
                        &mut self.on_shutdown,
                    );
                    if let Err(err) = cmd.execute(&args, &mut term).await {
                        log::warn!("command '{token}' failed: {err}");
                        term.write_line(&style::red(&format!("error: {err}")))?;
                    }
                },
                None => {
                    let surface = self.surface_mut()?;
                    surface.write(&format!("Command not found: {token}\r\n"))?;
                    surface.write("Type 'help' to see available commands\r\n")?;
                },
            }
        }
        if interactive {
            self.draw_prompt()?;
        }
        Ok(())
    }

    fn draw_prompt(&mut self) -> Result<()> {
        let prompt = self.options.prompt.clone();
        self.surface_mut()?.write(&prompt)
    }

    fn surface_mut(&mut self) -> Result<&mut (dyn Surface + 'static)> {
        self.surface.as_deref_mut().ok_or_else(Self::not_mounted)
    }

    fn not_mounted() -> PhosphorError {
        PhosphorError::Surface("session is not mounted".to_string())
    }
}
