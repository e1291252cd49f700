//! Skill description checks

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillDefinition};

use super::ValidationRule;

/// Validates the `description` frontmatter field.
///
/// Descriptions are what agents match tasks against, so beyond length
/// bounds this rule nudges authors (warning only) to state *when* the
/// skill applies, the "Use when ..." convention.
pub struct DescriptionRule;

impl ValidationRule for DescriptionRule {
    fn id(&self) -> RuleId {
        RuleId::Description
    }

    fn evaluate(&self, skill: &SkillDefinition, schema: &SchemaConfig) -> Vec<Finding> {
        let description = match skill.get_str("description") {
            Some(d) => d,
            None => {
                return vec![Finding::error(
                    RuleId::Description,
                    "description is required and must be a string",
                )
                .with_field("description")];
            }
        };

        let mut findings = Vec::new();
        let trimmed = description.trim();
        let len = trimmed.chars().count();

        if len < schema.min_description_length {
            findings.push(
                Finding::error(
                    RuleId::Description,
                    format!(
                        "description is {} characters, minimum is {}",
                        len, schema.min_description_length
                    ),
                )
                .with_field("description"),
            );
        } else if len > schema.max_description_length {
            findings.push(
                Finding::error(
                    RuleId::Description,
                    format!(
                        "description is {} characters, maximum is {}",
                        len, schema.max_description_length
                    ),
                )
                .with_field("description"),
            );
        }

        // Angle brackets are reserved for prompt templating.
        if trimmed.contains('<') || trimmed.contains('>') {
            findings.push(
                Finding::error(
                    RuleId::Description,
                    "description must not contain angle brackets (< or >)",
                )
                .with_field("description"),
            );
        }

        if !trimmed.to_lowercase().contains("when") {
            findings.push(
                Finding::warning(
                    RuleId::Description,
                    "description does not say when to use the skill \
                     (consider a 'Use when ...' clause)",
                )
                .with_field("description"),
            );
        }

        findings
    }
}
