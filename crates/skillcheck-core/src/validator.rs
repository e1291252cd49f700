//! Validation orchestrator

use std::path::Path;

use tracing::debug;

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{
    Finding, Result, RuleId, SkillDefinition, SkillError, ValidationResult, SKILL_FILE,
};

use crate::frontmatter::parse_frontmatter;
use crate::rules::default_rules;

/// Read and parse a skill directory into a [`SkillDefinition`].
///
/// Errors: [`SkillError::NotFound`] when the directory is missing,
/// [`SkillError::Io`] when SKILL.md cannot be read, and
/// [`SkillError::Parse`] when the frontmatter cannot be decoded.
pub fn load_skill(path: &Path) -> Result<SkillDefinition> {
    if !path.is_dir() {
        return Err(SkillError::NotFound(path.to_path_buf()));
    }

    let skill_file = path.join(SKILL_FILE);
    if !skill_file.is_file() {
        return Err(SkillError::NotFound(skill_file));
    }

    let raw = std::fs::read_to_string(&skill_file)?;
    let (frontmatter, body) = parse_frontmatter(&raw)?;
    Ok(SkillDefinition::new(path, frontmatter, body))
}

/// Validate one skill directory against the schema.
///
/// A missing SKILL.md or undecodable frontmatter short-circuits into a
/// single fatal finding rather than an error, so batch callers can keep
/// going. The only conditions surfaced as errors are a nonexistent skill
/// directory and an unreadable SKILL.md (permissions), which the caller
/// has to handle itself.
pub fn validate_skill(path: &Path, schema: &SchemaConfig) -> Result<ValidationResult> {
    if !path.is_dir() {
        return Err(SkillError::NotFound(path.to_path_buf()));
    }

    let skill_file = path.join(SKILL_FILE);
    if !skill_file.is_file() {
        return Ok(ValidationResult::new(
            path.to_path_buf(),
            vec![Finding::error(
                RuleId::Structure,
                format!("{SKILL_FILE} not found in skill directory"),
            )],
        ));
    }

    let raw = std::fs::read_to_string(&skill_file)?;

    let (frontmatter, body) = match parse_frontmatter(&raw) {
        Ok(parts) => parts,
        Err(SkillError::Parse(reason)) => {
            return Ok(ValidationResult::new(
                path.to_path_buf(),
                vec![Finding::error(RuleId::Frontmatter, reason)],
            ));
        }
        Err(other) => return Err(other),
    };

    let skill = SkillDefinition::new(path, frontmatter, body);
    let mut findings = Vec::new();

    // Fixed order: name, description, metadata, structure. Every rule
    // runs regardless of what the previous ones found.
    for rule in default_rules() {
        let rule_findings = rule.evaluate(&skill, schema);
        debug!(
            rule = %rule.id(),
            count = rule_findings.len(),
            path = %path.display(),
            "rule evaluated"
        );
        findings.extend(rule_findings);
    }

    Ok(ValidationResult::new(path.to_path_buf(), findings))
}
