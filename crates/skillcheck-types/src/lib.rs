//! Skillcheck Types - Core types for the skillcheck validation toolkit
//!
//! This crate defines the data model shared by the validator core, the
//! installer, and the CLI: skill definitions, findings, validation results,
//! and the error taxonomy.

pub mod error;
pub mod finding;
pub mod skill;

pub use error::{Result, SkillError};
pub use finding::{Finding, RuleId, Severity, ValidationResult};
pub use skill::SkillDefinition;

/// Fixed filename of the main skill definition inside a skill directory.
pub const SKILL_FILE: &str = "SKILL.md";
