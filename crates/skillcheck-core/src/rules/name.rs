//! Skill name checks

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillDefinition};

use super::ValidationRule;

/// Validates the `name` frontmatter field.
///
/// The sub-checks run independently rather than short-circuiting, so a
/// name like `-My_skill-` reports its charset, hyphen, and directory
/// mismatch problems in a single invocation.
pub struct NameRule;

impl ValidationRule for NameRule {
    fn id(&self) -> RuleId {
        RuleId::Name
    }

    fn evaluate(&self, skill: &SkillDefinition, schema: &SchemaConfig) -> Vec<Finding> {
        let name = match skill.get_str("name") {
            Some(n) => n,
            None => {
                return vec![
                    Finding::error(RuleId::Name, "name is required and must be a string")
                        .with_field("name"),
                ];
            }
        };

        let mut findings = Vec::new();
        let len = name.chars().count();

        if len < schema.min_name_length || len > schema.max_name_length {
            findings.push(
                Finding::error(
                    RuleId::Name,
                    format!(
                        "name length {} is outside the allowed range {}-{}",
                        len, schema.min_name_length, schema.max_name_length
                    ),
                )
                .with_field("name"),
            );
        }

        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            findings.push(
                Finding::error(
                    RuleId::Name,
                    format!(
                        "name '{name}' contains invalid character '{bad}': \
                         only lowercase letters, digits, and hyphens are allowed"
                    ),
                )
                .with_field("name"),
            );
        }

        if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
            findings.push(
                Finding::error(
                    RuleId::Name,
                    format!("name '{name}' must not have leading, trailing, or consecutive hyphens"),
                )
                .with_field("name"),
            );
        }

        let dir = skill.dir_name();
        if name != dir {
            findings.push(
                Finding::error(
                    RuleId::Name,
                    format!("name '{name}' must match parent directory '{dir}'"),
                )
                .with_field("name"),
            );
        }

        findings
    }
}
