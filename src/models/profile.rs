//! Profile Data Source
//!
//! The read-only record every terminal command renders from: identity and
//! contact channels, an ordered skill map, and the work-history, education,
//! project, and achievement lists. The profile is loaded exactly once at
//! startup and never mutated by the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The built-in profile shipped with the binary.
const BUILTIN_PROFILE: &str = include_str!("../../assets/profile.toml");

/// File name searched for in the user's config directory.
const PROFILE_FILE_NAME: &str = "profile.toml";

/// Identity and contact channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Full display name
    pub name: String,
    /// Professional title
    pub title: String,
    /// Contact email address
    pub email: String,
    /// Phone numbers
    #[serde(default)]
    pub phone: Vec<String>,
    /// Locations
    #[serde(default)]
    pub location: Vec<String>,
    /// LinkedIn handle/URL
    #[serde(default)]
    pub linkedin: String,
    /// GitHub handle/URL
    #[serde(default)]
    pub github: String,
    /// Short objective/summary paragraph
    #[serde(default)]
    pub objective: String,
}

impl Identity {
    /// Unix-style user name derived from the display name
    /// (lowercased, spaces removed).
    pub fn username(&self) -> String {
        self.name.to_lowercase().replace(' ', "")
    }
}

/// One skill category with its free-text details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub details: String,
}

/// A spoken language and proficiency level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
}

/// One work-history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    /// Bullet points describing the role
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub grade: String,
}

/// One project entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

/// One achievement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// Profile validation errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    EmptyName,

    #[error("Profile title must not be empty")]
    EmptyTitle,

    #[error("Skill category {0} has no details")]
    EmptySkillDetails(usize),
}

/// The complete profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity and contact channels
    pub identity: Identity,

    /// Skill categories in declaration order
    #[serde(default)]
    pub skills: Vec<SkillCategory>,

    /// Spoken languages in declaration order
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,

    /// Work history, most recent first
    #[serde(default)]
    pub experiences: Vec<Experience>,

    /// Education entries
    #[serde(default)]
    pub education: Vec<Education>,

    /// Project entries
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Achievement entries
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Profile {
    /// Parse the profile bundled into the binary.
    ///
    /// The bundled TOML is validated by tests, so a parse failure here is a
    /// build defect; callers still get a `Result` so a corrupted build
    /// fails loudly instead of panicking.
    pub fn builtin() -> Result<Self> {
        let profile: Profile = toml::from_str(BUILTIN_PROFILE)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from an explicit file path (TOML or JSON, by
    /// extension).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ProfileLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let profile: Profile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => return Err(Error::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        };

        profile.validate()?;
        Ok(profile)
    }

    /// Load the profile from the standard search path, falling back to the
    /// bundled profile when no user profile exists.
    ///
    /// Search order: `<config dir>/folioterm/profile.toml`, then the
    /// executable's directory, then the bundled default.
    pub fn load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                debug!("Loading profile from {}", path.display());
                return Self::load_from_file(&path);
            }
        }
        debug!("No user profile found, using the bundled profile");
        Self::builtin()
    }

    /// Candidate user-profile locations, in priority order.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("folioterm").join(PROFILE_FILE_NAME));
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join(PROFILE_FILE_NAME));
            }
        }
        paths
    }

    /// Validate the profile record.
    pub fn validate(&self) -> Result<()> {
        self.check().map_err(|e| Error::ProfileValidationFailed {
            reason: e.to_string(),
        })
    }

    fn check(&self) -> std::result::Result<(), ProfileError> {
        if self.identity.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.identity.title.trim().is_empty() {
            return Err(ProfileError::EmptyTitle);
        }
        for (i, skill) in self.skills.iter().enumerate() {
            if skill.details.trim().is_empty() {
                return Err(ProfileError::EmptySkillDetails(i + 1));
            }
        }
        Ok(())
    }
}
