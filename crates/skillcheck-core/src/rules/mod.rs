//! Rule evaluators
//!
//! Each rule is a stateless check over one parsed skill definition.
//! Rules accumulate findings instead of failing fast, so a single
//! validation pass reports every defect at once, and no rule's outcome
//! affects whether another rule runs.

mod description;
mod metadata;
mod name;
mod structure;

pub use description::DescriptionRule;
pub use metadata::MetadataRule;
pub use name::NameRule;
pub use structure::StructureRule;

use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Finding, RuleId, SkillDefinition};

/// A named validation check, pure given its inputs.
pub trait ValidationRule {
    /// Identifier stamped onto this rule's findings
    fn id(&self) -> RuleId;

    /// Evaluate the skill, returning zero or more findings
    fn evaluate(&self, skill: &SkillDefinition, schema: &SchemaConfig) -> Vec<Finding>;
}

/// All rules in their fixed, deterministic evaluation order:
/// name, description, metadata, structure.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(NameRule),
        Box::new(DescriptionRule),
        Box::new(MetadataRule),
        Box::new(StructureRule),
    ]
}
