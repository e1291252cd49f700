//! Directory layout checks

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillDefinition};
use tracing::warn;

use super::ValidationRule;

/// Validates the skill directory layout.
///
/// A skill may carry `scripts/`, `references/`, and `assets/` (none are
/// required); anything else gets a warning. Loose files and hidden
/// directories are ignored. SKILL.md presence itself is a precondition
/// the orchestrator enforces before any rule runs.
pub struct StructureRule;

impl ValidationRule for StructureRule {
    fn id(&self) -> RuleId {
        RuleId::Structure
    }

    fn evaluate(&self, skill: &SkillDefinition, schema: &SchemaConfig) -> Vec<Finding> {
        let entries = match std::fs::read_dir(&skill.path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %skill.path.display(), error = %e, "cannot list skill directory");
                return Vec::new();
            }
        };

        let mut findings = Vec::new();
        let mut names: Vec<String> = entries
            .flatten()
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| !n.starts_with('.'))
            .collect();
        names.sort();

        for name in names {
            if !schema.optional_subdirectories.contains(&name) {
                findings.push(Finding::warning(
                    RuleId::Structure,
                    format!("unexpected directory: {name}"),
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcheck_types::skill::mapping_from_pairs;
    use std::fs;

    fn skill_at(path: &std::path::Path) -> SkillDefinition {
        SkillDefinition::new(path, mapping_from_pairs([("name", "x")]), "")
    }

    #[test]
    fn test_recognized_subdirectories_pass() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["scripts", "references", "assets"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        let findings = StructureRule.evaluate(&skill_at(dir.path()), &SchemaConfig::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_bare_skill_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let findings = StructureRule.evaluate(&skill_at(dir.path()), &SchemaConfig::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_unexpected_directory_warns() {
        // Scenario: an extra docs/ folder
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let findings = StructureRule.evaluate(&skill_at(dir.path()), &SchemaConfig::default());
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].is_error());
        assert_eq!(findings[0].message, "unexpected directory: docs");
    }

    #[test]
    fn test_files_and_hidden_dirs_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SKILL.md"), "stub").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let findings = StructureRule.evaluate(&skill_at(dir.path()), &SchemaConfig::default());
        assert!(findings.is_empty());
    }
}
