//! Profile data model, loaded from TOML.
//!
//! A bundled sample profile ships with the crate; embedders can load their
//! own with [`Profile::from_toml`].

use phosphor_types::{PhosphorError, Result};
use serde::{Deserialize, Serialize};

/// Everything the portfolio commands render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Source repository URL, printed by `source`.
    pub repository: String,
    /// Paragraphs for `about`.
    pub about: Vec<String>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 1 to 5, rendered as a bar.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl Profile {
    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PhosphorError::Config(format!("profile: {e}")))
    }

    /// The sample profile bundled with the crate.
    pub fn sample() -> Result<Self> {
        Self::from_toml(include_str!("../data/profile.toml"))
    }
}
