//! Command trait, registry, and the handle passed to handlers.
//!
//! Commands are registered under a canonical lowercase name plus any number
//! of aliases; resolution is case-insensitive and an alias yields the same
//! command object as its canonical name. Handlers are uniformly
//! asynchronous: a synchronous command simply returns an already-ready
//! future, so the dispatcher's await logic is single-shaped.

use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use phosphor_types::{PhosphorError, Result};

use crate::clock::Clock;
use crate::surface::Surface;

/// Declarative option metadata, used only for generated help text.
///
/// The dispatcher never validates option syntax; `--flag` tokens pass
/// through to handlers as plain arguments.
#[derive(Debug, Clone, Copy)]
pub struct OptSpec {
    pub flag: &'static str,
    pub description: &'static str,
}

/// Declarative positional-argument metadata, used only for help text.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Matched case-insensitively.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Alternate names, each globally unique across the registry.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Hidden commands are excluded from listings (boot/help-support).
    fn hidden(&self) -> bool {
        false
    }

    /// Option metadata for `help <name>`.
    fn options(&self) -> &[OptSpec] {
        &[]
    }

    /// Positional-argument metadata for `help <name>`.
    fn arguments(&self) -> &[ArgSpec] {
        &[]
    }

    /// Execute with the given arguments and terminal handle.
    ///
    /// The dispatcher awaits the returned future to completion before
    /// accepting further input; errors are caught and reported, never fatal
    /// to the session.
    fn execute<'a>(
        &'a self,
        args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>>;
}

/// Registry of available commands.
///
/// Owned by the session, no ambient global state. Mutated only through
/// explicit `register`/`remove`.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Rc<dyn Command>>,
    /// alias -> canonical name.
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and all aliases.
    ///
    /// A collision with any existing name or alias is a hard error; nothing
    /// is silently overwritten.
    pub fn register(&mut self, cmd: Rc<dyn Command>) -> Result<()> {
        let name = cmd.name().to_ascii_lowercase();
        if self.is_taken(&name) {
            return Err(PhosphorError::Registry(format!(
                "command name already registered: {name}"
            )));
        }
        let mut alias_names = Vec::new();
        for alias in cmd.aliases() {
            let alias = alias.to_ascii_lowercase();
            if alias == name || self.is_taken(&alias) || alias_names.contains(&alias) {
                return Err(PhosphorError::Registry(format!(
                    "alias already registered: {alias}"
                )));
            }
            alias_names.push(alias);
        }
        for alias in alias_names {
            self.aliases.insert(alias, name.clone());
        }
        self.commands.insert(name, cmd);
        Ok(())
    }

    /// Remove a command and all its aliases.
    pub fn remove(&mut self, name: &str) -> Option<Rc<dyn Command>> {
        let name = name.to_ascii_lowercase();
        let cmd = self.commands.remove(&name)?;
        self.aliases.retain(|_, canonical| canonical != &name);
        Some(cmd)
    }

    /// Resolve a typed token to a command, by primary name or alias.
    pub fn resolve(&self, token: &str) -> Option<Rc<dyn Command>> {
        let token = token.to_ascii_lowercase();
        if let Some(cmd) = self.commands.get(&token) {
            return Some(Rc::clone(cmd));
        }
        let canonical = self.aliases.get(&token)?;
        self.commands.get(canonical).map(Rc::clone)
    }

    /// Lazy, order-irrelevant sequence of registered commands.
    ///
    /// Consumers filter and sort (e.g. alphabetically for help display).
    pub fn list(&self, include_hidden: bool) -> impl Iterator<Item = &Rc<dyn Command>> {
        self.commands
            .values()
            .filter(move |cmd| include_hidden || !cmd.hidden())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn is_taken(&self, name: &str) -> bool {
        self.commands.contains_key(name) || self.aliases.contains_key(name)
    }
}

/// The terminal handle exposed to each handler for the duration of one
/// dispatch.
///
/// Borrows the session's surface, registry, clock, and shutdown bridge.
pub struct Term<'s> {
    surface: &'s mut dyn Surface,
    registry: &'s CommandRegistry,
    clock: &'s dyn Clock,
    on_shutdown: &'s mut Option<Box<dyn FnMut()>>,
}

impl<'s> Term<'s> {
    pub(crate) fn new(
        surface: &'s mut dyn Surface,
        registry: &'s CommandRegistry,
        clock: &'s dyn Clock,
        on_shutdown: &'s mut Option<Box<dyn FnMut()>>,
    ) -> Self {
        Self {
            surface,
            registry,
            clock,
            on_shutdown,
        }
    }

    /// Append raw text without a line terminator.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.surface.write(text)
    }

    /// Append text plus a line terminator.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.surface.write(text)?;
        self.surface.write("\r\n")
    }

    /// Append a blank line.
    pub fn return_line(&mut self) -> Result<()> {
        self.surface.write("\r\n")
    }

    /// Erase all prior output.
    pub fn clear(&mut self) -> Result<()> {
        self.surface.clear()
    }

    /// Read-only access to the full registry (used by `help`).
    pub fn registry(&self) -> &CommandRegistry {
        self.registry
    }

    /// Suspend for roughly `ms` milliseconds via the session clock.
    pub fn sleep(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        self.clock.sleep(ms)
    }

    /// Invoke the externally supplied shutdown callback, if any.
    ///
    /// The bridge to power-off animation; a no-op when no handler is set.
    pub fn shutdown(&mut self) {
        if let Some(callback) = self.on_shutdown.as_mut() {
            callback();
        }
    }
}
