//! Error types for skill validation and installation

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced past a single validation or install invocation.
///
/// Rule violations are never errors at this level: rules return
/// [`Finding`](crate::Finding)s, and the orchestrator converts parse
/// failures inside a skill file into findings as well. Only conditions
/// the caller must handle itself (bad paths, unreadable files, broken
/// configuration) take this form.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Schema configuration source present but malformed
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Configuration file that failed to load
        path: PathBuf,
        /// Parse or validation failure detail
        reason: String,
    },

    /// The structured frontmatter header could not be decoded
    #[error("Frontmatter parse error: {0}")]
    Parse(String),

    /// Skill directory does not exist or is not a directory
    #[error("Skill directory not found: {0}")]
    NotFound(PathBuf),

    /// Install destination already occupied
    #[error("Destination {0} already exists (pass force to replace)")]
    AlreadyExists(PathBuf),

    /// A skill failed validation where a valid one is required
    #[error("Skill at {path} has {count} validation error(s)")]
    Invalid {
        /// The skill directory that failed
        path: PathBuf,
        /// Number of error-severity findings
        count: usize,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillError>;
