//! Skill discovery across multiple directories
//!
//! A registry scans an ordered list of skill roots (personal, project,
//! agent-specific) one level deep and batch-validates everything it
//! finds. Per-skill failures become results, never batch aborts.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillError, ValidationResult, SKILL_FILE};

use crate::validator::validate_skill;

/// Scans configured directories for skill folders.
#[derive(Debug, Default)]
pub struct SkillRegistry {
    /// Skill root directories, in priority order
    directories: Vec<PathBuf>,
}

impl SkillRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skills root directory to scan
    pub fn add_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Configured root directories
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Scan all roots one level deep for folders containing SKILL.md.
    ///
    /// Missing roots are skipped silently; unreadable ones are logged
    /// and skipped. Candidates come back sorted for determinism.
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        for dir in &self.directories {
            if !dir.is_dir() {
                debug!(path = %dir.display(), "skills root does not exist, skipping");
                continue;
            }
            scan_root(dir, &mut candidates);
        }

        candidates.sort();
        info!(count = candidates.len(), "discovered skill directories");
        candidates
    }

    /// Validate every discovered skill.
    ///
    /// Skills that vanish or become unreadable mid-run are reported as a
    /// result with a single I/O finding so the rest of the batch still
    /// completes.
    pub fn validate_all(&self, schema: &SchemaConfig) -> Vec<ValidationResult> {
        self.discover()
            .iter()
            .map(|path| match validate_skill(path, schema) {
                Ok(result) => result,
                Err(e) => io_failure(path, &e),
            })
            .collect()
    }
}

fn scan_root(dir: &Path, candidates: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read skills root");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() && path.join(SKILL_FILE).is_file() {
            debug!(path = %path.display(), "found skill candidate");
            candidates.push(path);
        }
    }
}

fn io_failure(path: &Path, error: &SkillError) -> ValidationResult {
    ValidationResult::new(
        path.to_path_buf(),
        vec![Finding::error(RuleId::Io, error.to_string())],
    )
}
