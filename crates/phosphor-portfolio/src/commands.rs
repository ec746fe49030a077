//! Portfolio commands rendered from a [`Profile`].

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use phosphor_term::{ArgSpec, Command, CommandRegistry, Term};
use phosphor_types::{Result, style};

use crate::profile::Profile;

/// Rendering hints for narrow surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layout {
    /// Tighten columns and truncate long sections.
    pub compact: bool,
}

/// Register the whole portfolio command set against one profile.
pub fn register_portfolio_commands(
    reg: &mut CommandRegistry,
    profile: Rc<Profile>,
    layout: Layout,
) -> Result<()> {
    reg.register(Rc::new(AboutCmd {
        profile: Rc::clone(&profile),
    }))?;
    reg.register(Rc::new(SkillsCmd {
        profile: Rc::clone(&profile),
        layout,
    }))?;
    reg.register(Rc::new(ExperienceCmd {
        profile: Rc::clone(&profile),
        layout,
    }))?;
    reg.register(Rc::new(CertsCmd {
        profile: Rc::clone(&profile),
    }))?;
    reg.register(Rc::new(AchievementsCmd {
        profile: Rc::clone(&profile),
    }))?;
    reg.register(Rc::new(SourceCmd {
        profile: Rc::clone(&profile),
    }))?;
    reg.register(Rc::new(WelcomeCmd {
        profile: Rc::clone(&profile),
    }))?;
    reg.register(Rc::new(BootCmd))?;
    reg.register(Rc::new(ShutdownCmd))?;
    log::debug!("registered portfolio commands for {}", profile.name);
    Ok(())
}

fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(5));
    format!("[{}{}]", "█".repeat(filled), "░".repeat(5 - filled))
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd {
    profile: Rc<Profile>,
}

impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn more about me"
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            for paragraph in &self.profile.about {
                term.write_line(paragraph)?;
                term.return_line()?;
            }
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd {
    profile: Rc<Profile>,
    layout: Layout,
}

impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Show skills with proficiency levels"
    }
    fn aliases(&self) -> &[&str] {
        &["skill"]
    }
    fn arguments(&self) -> &[ArgSpec] {
        &[ArgSpec {
            name: "filter",
            description: "Only show skills whose name contains this text",
        }]
    }
    fn execute<'a>(
        &'a self,
        args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let filter = args.first().map(|f| f.to_lowercase());
            let mut matched = false;
            for group in &self.profile.skill_groups {
                let skills: Vec<_> = group
                    .skills
                    .iter()
                    .filter(|s| match &filter {
                        Some(f) => s.name.to_lowercase().contains(f),
                        None => true,
                    })
                    .collect();
                if skills.is_empty() {
                    continue;
                }
                matched = true;
                term.write_line(&style::bold(&group.title))?;
                for skill in skills {
                    let bar = style::green(&level_bar(skill.level));
                    term.write_line(&format!("  {bar} {}", skill.name))?;
                }
                if !self.layout.compact {
                    term.return_line()?;
                }
            }
            if !matched && let Some(f) = args.first() {
                term.write_line(&format!("No skills matching '{f}'"))?;
            }
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

struct ExperienceCmd {
    profile: Rc<Profile>,
    layout: Layout,
}

impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Show work experience"
    }
    fn aliases(&self) -> &[&str] {
        &["work", "exp"]
    }
    fn arguments(&self) -> &[ArgSpec] {
        &[ArgSpec {
            name: "company",
            description: "Only show entries whose company contains this text",
        }]
    }
    fn execute<'a>(
        &'a self,
        args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let filter = args.first().map(|f| f.to_lowercase());
            let bullet_cap = if self.layout.compact { 3 } else { usize::MAX };
            let mut matched = false;
            for entry in &self.profile.experience {
                if let Some(f) = &filter
                    && !entry.company.to_lowercase().contains(f)
                {
                    continue;
                }
                matched = true;
                term.write_line(&format!("{} | {}", style::bold(&entry.company), entry.role))?;
                term.write_line(&style::dim(&format!(
                    "{} | {}",
                    entry.period, entry.location
                )))?;
                for bullet in entry.description.iter().take(bullet_cap) {
                    term.write_line(&format!("  - {bullet}"))?;
                }
                let hidden = entry.description.len().saturating_sub(bullet_cap);
                if hidden > 0 {
                    term.write_line(&style::dim(&format!("  (+{hidden} more)")))?;
                }
                term.return_line()?;
            }
            if !matched && let Some(f) = args.first() {
                term.write_line(&format!("No experience matching '{f}'"))?;
            }
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// certs
// ---------------------------------------------------------------------------

struct CertsCmd {
    profile: Rc<Profile>,
}

impl Command for CertsCmd {
    fn name(&self) -> &str {
        "certs"
    }
    fn description(&self) -> &str {
        "Show certifications"
    }
    fn aliases(&self) -> &[&str] {
        &["certifications"]
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            term.write_line("Certifications:")?;
            for cert in &self.profile.certifications {
                term.write_line(&format!("  {} ({})", cert.name, style::cyan(&cert.year)))?;
            }
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// achievements
// ---------------------------------------------------------------------------

struct AchievementsCmd {
    profile: Rc<Profile>,
}

impl Command for AchievementsCmd {
    fn name(&self) -> &str {
        "achievements"
    }
    fn description(&self) -> &str {
        "Show achievements"
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            for achievement in &self.profile.achievements {
                term.write_line(&format!(
                    "{}  {}",
                    achievement.icon,
                    style::bold(&achievement.title)
                ))?;
                term.write_line(&format!("    {}", achievement.description))?;
                term.return_line()?;
            }
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// source
// ---------------------------------------------------------------------------

struct SourceCmd {
    profile: Rc<Profile>,
}

impl Command for SourceCmd {
    fn name(&self) -> &str {
        "source"
    }
    fn description(&self) -> &str {
        "Show where this terminal's source lives"
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move { term.write_line(&style::cyan(&self.profile.repository)) })
    }
}

// ---------------------------------------------------------------------------
// welcome (hidden)
// ---------------------------------------------------------------------------

struct WelcomeCmd {
    profile: Rc<Profile>,
}

impl Command for WelcomeCmd {
    fn name(&self) -> &str {
        "welcome"
    }
    fn description(&self) -> &str {
        "Print the welcome banner"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let banner = format!("Welcome to {}'s terminal", self.profile.name);
            term.write_line(&style::bold_cyan(&banner))?;
            term.write_line(&style::dim(&"─".repeat(37)))?;
            term.write_line(&self.profile.tagline)?;
            term.write_line("📝  Type \"help\" for available commands")?;
            term.write_line("🔍  Try typing some commands to get started")?;
            term.return_line()?;
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// boot (hidden)
// ---------------------------------------------------------------------------

struct BootCmd;

const BOOT_STAGES: &[(&str, u64)] = &[
    ("PHOSPHOR BIOS v0.1.0", 200),
    ("Memory check ............ OK", 150),
    ("Loading profile data .... OK", 150),
    ("Mounting registry ....... OK", 150),
    ("Starting services ....... OK", 200),
];

impl Command for BootCmd {
    fn name(&self) -> &str {
        "boot"
    }
    fn description(&self) -> &str {
        "Play the boot animation"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            for (line, delay) in BOOT_STAGES {
                term.write_line(&style::green(line))?;
                term.sleep(*delay).await;
            }
            term.write_line("Boot complete.")?;
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// shutdown
// ---------------------------------------------------------------------------

struct ShutdownCmd;

impl Command for ShutdownCmd {
    fn name(&self) -> &str {
        "shutdown"
    }
    fn description(&self) -> &str {
        "Power off the terminal"
    }
    fn aliases(&self) -> &[&str] {
        &["exit"]
    }
    fn execute<'a>(
        &'a self,
        _args: &'a [String],
        term: &'a mut Term<'_>,
    ) -> LocalBoxFuture<'a, Result<()>> {
        Box::pin(async move {
            term.write_line("Powering off...")?;
            term.shutdown();
            Ok(())
        })
    }
}
