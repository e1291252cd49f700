//! Skillcheck Core - declarative skill-definition validator
//!
//! Checks a skill directory (a folder holding SKILL.md with YAML
//! frontmatter plus optional resource subdirectories) against a
//! [`SchemaConfig`](skillcheck_schema::SchemaConfig) and reports typed
//! findings instead of failing on the first defect.
//!
//! ## Pipeline
//!
//! 1. Locate and read SKILL.md (missing file short-circuits into a
//!    single fatal finding)
//! 2. Split and decode the frontmatter block ([`frontmatter`])
//! 3. Run every rule evaluator independently ([`rules`]) and collect
//!    their findings in a fixed order
//! 4. Derive the verdict: valid iff no error-severity finding
//!
//! Rules never abort each other, so one pass reports every defect a
//! skill has rather than one at a time.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod frontmatter;
pub mod registry;
pub mod rules;
pub mod validator;

pub use registry::SkillRegistry;
pub use validator::{load_skill, validate_skill};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{load_skill, validate_skill, SkillRegistry};
    pub use skillcheck_schema::SchemaConfig;
    pub use skillcheck_types::{Finding, RuleId, Severity, SkillDefinition, ValidationResult};
}
