//! Built-in commands: `help`, `clear`, and the hidden `sleep`.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use phosphor_types::{PhosphorError, Result, style};

use crate::command::{ArgSpec, Command, CommandRegistry, OptSpec, Term};

/// Register the built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Rc::new(HelpCmd))?;
    reg.register(Rc::new(ClearCmd))?;
    reg.register(Rc::new(SleepCmd))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;

impl HelpCmd {
    fn describe(&self, name: &str, term: &mut Term<'_>) -> Result<()> {
        let Some(cmd) = term.registry().resolve(name) else {
            return Err(PhosphorError::Command(format!("unknown command: {name}")));
        };
        term.write_line(&style::bold(cmd.name()))?;
        term.write_line(&format!("  {}", cmd.description()))?;
        if !cmd.aliases().is_empty() {
            term.write_line(&format!("  Aliases: {}", cmd.aliases().join(", ")))?;
        }
        if !cmd.arguments().is_empty() {
            term.write_line("  Arguments:")?;
            for arg in cmd.arguments() {
                term.write_line(&format!("    {:14}{}", arg.name, arg.description))?;
            }
        }
        if !cmd.options().is_empty() {
            term.write_line("  Options:")?;
            for opt in cmd.options() {
                term.write_line(&format!("    {:14}{}", opt.flag, opt.description))?;
            }
        }
        Ok(())
    }

    fn list_all(&self, term: &mut Term<'_>) -> Result<()> {
        let mut commands: Vec<Rc<dyn Command>> = term.registry().list(false).map(Rc::clone).collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));

        let longest = commands.iter().map(|c| c.name().len()).max().unwrap_or(0);

        term.write_line("Available commands:")?;
        term.return_line()?;
        for cmd in &commands {
            let padding = " ".repeat(longest - cmd.name().len() + 2);
            term.write_line(&format!("  {}{padding}{}", cmd.name(), cmd.description()))?;
        }
        term.return_line()?;
        term.write_line(&style::dim("Type 'help <command>' for details."))?;
        Ok(())
    }
}

impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display available commands"
    }
    fn arguments(&self) -> &[ArgSpec] {
        &[ArgSpec {
            name: "command",
            description: "Show details for a single command",
        }]
    }
    fn execute<'a>(
        &'a self,
        args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match args.first() {
                Some(name) => self.describe(name, term),
                None => self.list_all(term),
            }
        })
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    fn options(&self) -> &[OptSpec] {
        &[OptSpec {
            flag: "-s, --silent",
            description: "Accepted for boot-sequence symmetry; clear is always silent",
        }]
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move { term.clear() })
    }
}

// ---------------------------------------------------------------------------
// sleep (hidden)
// ---------------------------------------------------------------------------

struct SleepCmd;

impl Command for SleepCmd {
    fn name(&self) -> &str {
        "sleep"
    }
    fn description(&self) -> &str {
        "Pause for a number of milliseconds"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn arguments(&self) -> &[ArgSpec] {
        &[ArgSpec {
            name: "ms",
            description: "Delay in milliseconds",
        }]
    }
    fn options(&self) -> &[OptSpec] {
        &[OptSpec {
            flag: "-s, --silent",
            description: "Suppress the completion message",
        }]
    }
    fn execute<'a>(
        &'a self,
        args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let mut ms: Option<u64> = None;
            let mut silent = false;
            for arg in args {
                match arg.as_str() {
                    "-s" | "--silent" => silent = true,
                    other => {
                        ms = Some(other.parse().map_err(|_| {
                            PhosphorError::Command(format!("sleep: invalid duration '{other}'"))
                        })?);
                    },
                }
            }
            let ms =
                ms.ok_or_else(|| PhosphorError::Command("usage: sleep <ms> [-s]".to_string()))?;
            term.sleep(ms).await;
            if !silent {
                term.write_line(&format!("Slept for {ms}ms"))?;
            }
            Ok(())
        })
    }
}
