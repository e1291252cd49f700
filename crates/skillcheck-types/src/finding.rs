//! Findings and validation results

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Severity of a finding. Only errors affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which check produced a finding.
///
/// `Frontmatter` and `Io` identify short-circuit findings emitted by the
/// orchestrator itself when the skill file cannot be located or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleId {
    Name,
    Description,
    Metadata,
    Structure,
    Frontmatter,
    Io,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuleId::Name => "name",
            RuleId::Description => "description",
            RuleId::Metadata => "metadata",
            RuleId::Structure => "structure",
            RuleId::Frontmatter => "frontmatter",
            RuleId::Io => "io",
        };
        write!(f, "{s}")
    }
}

/// One validation outcome. Created by a rule, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub rule: RuleId,
    pub message: String,
    /// Pointer into the frontmatter, e.g. `name` or `metadata.version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Finding {
    /// Create an error-severity finding
    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            message: message.into(),
            field: None,
        }
    }

    /// Create a warning-severity finding
    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message: message.into(),
            field: None,
        }
    }

    /// Attach a field pointer
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// True if this finding makes the skill invalid
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Aggregate of all findings for one skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Skill directory that was validated
    pub path: PathBuf,
    /// All findings, in deterministic rule order
    pub findings: Vec<Finding>,
    /// True iff no finding has error severity
    pub is_valid: bool,
}

impl ValidationResult {
    /// Build a result, deriving `is_valid` from the findings
    pub fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        let is_valid = !findings.iter().any(Finding::is_error);
        Self {
            path,
            findings,
            is_valid,
        }
    }

    /// Number of error-severity findings
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    /// Number of warning-severity findings
    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| !f.is_error()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_derived_from_findings() {
        let result = ValidationResult::new(
            PathBuf::from("/tmp/demo"),
            vec![Finding::warning(RuleId::Structure, "unexpected directory: docs")],
        );
        assert!(result.is_valid);
        assert_eq!(result.warning_count(), 1);

        let result = ValidationResult::new(
            PathBuf::from("/tmp/demo"),
            vec![Finding::error(RuleId::Name, "name is required")],
        );
        assert!(!result.is_valid);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_finding_display() {
        let f = Finding::error(RuleId::Name, "name is required").with_field("name");
        assert_eq!(f.to_string(), "error: name is required");
        assert_eq!(f.field.as_deref(), Some("name"));
    }
}
