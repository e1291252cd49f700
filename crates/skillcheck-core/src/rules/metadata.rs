//! Metadata and frontmatter property checks

use serde_yaml::Value;

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillDefinition};

use super::ValidationRule;

/// Validates the optional `metadata` mapping and frontmatter key usage.
///
/// Unknown keys, both top-level and under `metadata`, only warn: newer
/// tooling may write keys this validator has not learned yet, and those
/// must pass through untouched. The one hard check is `metadata.version`,
/// which has to look like `MAJOR.MINOR.PATCH`.
pub struct MetadataRule;

impl ValidationRule for MetadataRule {
    fn id(&self) -> RuleId {
        RuleId::Metadata
    }

    fn evaluate(&self, skill: &SkillDefinition, schema: &SchemaConfig) -> Vec<Finding> {
        let mut findings = Vec::new();

        for key in skill.frontmatter.keys() {
            let Some(key) = key.as_str() else { continue };
            if !schema.allowed_properties.contains(key) {
                findings.push(
                    Finding::warning(
                        RuleId::Metadata,
                        format!("unrecognized frontmatter key: {key}"),
                    )
                    .with_field(key),
                );
            }
        }

        let metadata = match skill.get("metadata") {
            None => return findings,
            Some(Value::Mapping(map)) => map,
            Some(_) => {
                findings.push(
                    Finding::error(RuleId::Metadata, "metadata must be a mapping")
                        .with_field("metadata"),
                );
                return findings;
            }
        };

        for key in metadata.keys() {
            let Some(key) = key.as_str() else { continue };
            if !schema.recognized_metadata_keys.contains(key) {
                findings.push(
                    Finding::warning(
                        RuleId::Metadata,
                        format!("unrecognized metadata key: {key}"),
                    )
                    .with_field(format!("metadata.{key}")),
                );
            }
        }

        if let Some(version) = metadata.get("version") {
            let ok = version
                .as_str()
                .is_some_and(|v| is_semver_like(v));
            if !ok {
                findings.push(
                    Finding::error(
                        RuleId::Metadata,
                        format!(
                            "metadata.version {} must be MAJOR.MINOR.PATCH",
                            describe(version)
                        ),
                    )
                    .with_field("metadata.version"),
                );
            }
        }

        findings
    }
}

/// Three dot-separated non-negative integer components.
fn is_semver_like(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn describe(value: &Value) -> String {
    match value.as_str() {
        Some(s) => format!("'{s}'"),
        None => "(not a string)".to_string(),
    }
}
