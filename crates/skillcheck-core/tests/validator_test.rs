//! End-to-end validation tests over real skill directories

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use skillcheck_core::rules::{
    DescriptionRule, MetadataRule, NameRule, StructureRule, ValidationRule,
};
use skillcheck_core::{load_skill, validate_skill};
use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, Severity, SkillError};

const GOOD_DESCRIPTION: &str =
    "Reviews code for defects and style problems. Use when analyzing a pull request.";

fn make_skill(root: &Path, dir_name: &str, skill_md: &str) -> PathBuf {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), skill_md).unwrap();
    dir
}

fn valid_skill(root: &Path, name: &str) -> PathBuf {
    make_skill(
        root,
        name,
        &format!("---\nname: {name}\ndescription: {GOOD_DESCRIPTION}\n---\n\n# Skill\n"),
    )
}

#[test]
fn conforming_skill_is_valid_with_no_error_findings() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "code-reviewer",
        &format!(
            "---\nname: code-reviewer\ndescription: {GOOD_DESCRIPTION}\n\
             license: MIT\nmetadata:\n  version: 1.0.0\n  author: someone\n---\n\nBody.\n"
        ),
    );
    fs::create_dir(dir.join("scripts")).unwrap();
    fs::create_dir(dir.join("references")).unwrap();

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(result.is_valid, "findings: {:?}", result.findings);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn uppercase_name_always_yields_charset_error() {
    // Independence: the name error appears even when every other field
    // is broken too.
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "whatever",
        "---\nname: Uppercase-Name\ndescription: short\nmetadata: nope\n---\n",
    );

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(!result.is_valid);
    assert!(result
        .findings
        .iter()
        .any(|f| f.rule == RuleId::Name && f.message.contains("'U'")));
}

#[test]
fn rule_order_does_not_change_the_finding_multiset() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "my-skill",
        "---\nname: My-Skill\ndescription: short\nmetadata:\n  version: \"1.0\"\n  extra: x\n---\n",
    );
    fs::create_dir(dir.join("docs")).unwrap();

    let skill = load_skill(&dir).unwrap();
    let schema = SchemaConfig::default();

    let forward: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(NameRule),
        Box::new(DescriptionRule),
        Box::new(MetadataRule),
        Box::new(StructureRule),
    ];
    let reversed: Vec<Box<dyn ValidationRule>> = vec![
        Box::new(StructureRule),
        Box::new(MetadataRule),
        Box::new(DescriptionRule),
        Box::new(NameRule),
    ];

    let collect = |rules: &[Box<dyn ValidationRule>]| -> HashMap<Finding, usize> {
        let mut counts = HashMap::new();
        for rule in rules {
            for finding in rule.evaluate(&skill, &schema) {
                *counts.entry(finding).or_insert(0) += 1;
            }
        }
        counts
    };

    assert_eq!(collect(&forward), collect(&reversed));
}

#[test]
fn validation_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "my-skill",
        "---\nname: my-skill\ndescription: short\n---\n",
    );

    let schema = SchemaConfig::default();
    let first = validate_skill(&dir, &schema).unwrap();
    let second = validate_skill(&dir, &schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_uppercase_name_in_lowercase_dir_has_two_errors() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "my-skill",
        &format!("---\nname: My-Skill\ndescription: {GOOD_DESCRIPTION}\n---\n"),
    );

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    let name_errors: Vec<&Finding> = result
        .findings
        .iter()
        .filter(|f| f.rule == RuleId::Name && f.is_error())
        .collect();
    assert_eq!(name_errors.len(), 2);
    assert!(name_errors.iter().any(|f| f.message.contains("invalid character")));
    assert!(name_errors
        .iter()
        .any(|f| f.message.contains("match parent directory")));
}

#[test]
fn scenario_missing_closing_marker_short_circuits() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(root.path(), "broken", "---\nname: broken\nno closing marker\n");

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].rule, RuleId::Frontmatter);
    assert_eq!(result.findings[0].severity, Severity::Error);
}

#[test]
fn scenario_two_component_version_is_the_only_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(
        root.path(),
        "versioned",
        &format!(
            "---\nname: versioned\ndescription: {GOOD_DESCRIPTION}\n\
             metadata:\n  version: \"1.0\"\n---\n"
        ),
    );

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_count(), 1);
    let error = result.findings.iter().find(|f| f.is_error()).unwrap();
    assert_eq!(error.rule, RuleId::Metadata);
    assert_eq!(error.field.as_deref(), Some("metadata.version"));
}

#[test]
fn scenario_extra_docs_directory_warns_but_stays_valid() {
    let root = tempfile::tempdir().unwrap();
    let dir = valid_skill(root.path(), "documented");
    fs::create_dir(dir.join("docs")).unwrap();

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.warning_count(), 1);
    assert!(result.findings[0].message.contains("docs"));
}

#[test]
fn empty_frontmatter_block_reports_the_missing_fields() {
    let root = tempfile::tempdir().unwrap();
    let dir = make_skill(root.path(), "hollow", "---\n---\nJust a body.\n");

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(!result.is_valid);
    // Field-level errors, not one opaque parse finding.
    assert!(result
        .findings
        .iter()
        .any(|f| f.rule == RuleId::Name && f.message.contains("required")));
    assert!(result
        .findings
        .iter()
        .any(|f| f.rule == RuleId::Description && f.message.contains("required")));
    assert!(!result.findings.iter().any(|f| f.rule == RuleId::Frontmatter));
}

#[test]
fn missing_skill_md_is_a_fatal_finding_not_an_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("empty-skill");
    fs::create_dir(&dir).unwrap();

    let result = validate_skill(&dir, &SchemaConfig::default()).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].rule, RuleId::Structure);
}

#[test]
fn nonexistent_path_surfaces_as_not_found() {
    let err = validate_skill(Path::new("/nonexistent/skill"), &SchemaConfig::default())
        .unwrap_err();
    assert!(matches!(err, SkillError::NotFound(_)));
}

#[test]
fn tightened_schema_changes_the_verdict() {
    let root = tempfile::tempdir().unwrap();
    let dir = valid_skill(root.path(), "terse-skill");

    let mut schema = SchemaConfig::default();
    schema.min_description_length = GOOD_DESCRIPTION.len() + 1;

    let result = validate_skill(&dir, &schema).unwrap();
    assert!(!result.is_valid);
}
