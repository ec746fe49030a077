//! Portfolio command set for the PHOSPHOR terminal.
//!
//! A [`Profile`] (TOML) drives a family of commands: `about`, `skills`,
//! `experience`, `certs`, `achievements`, `source`, plus the hidden
//! `welcome`/`boot` banner commands and `shutdown`.

mod commands;
mod profile;

pub use commands::{Layout, register_portfolio_commands};
pub use profile::{Achievement, Certification, Profile, Skill, SkillGroup, WorkExperience};
