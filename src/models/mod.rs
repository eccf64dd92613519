//! Core data models for FolioTerm
//!
//! This module contains the data structures that represent the domain
//! entities in FolioTerm: the tagged lines of a terminal session and the
//! read-only profile record the command set is built from.

pub mod buffer_line;
pub mod profile;

// Re-exports for convenience
pub use buffer_line::{BufferLine, LineKind};
pub use profile::{
    Achievement, Education, Experience, Identity, LanguageSkill, Profile, Project, SkillCategory,
};
