//! New-skill scaffolding

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::info;

use skillcheck_core::frontmatter::compose_skill_md;
use skillcheck_core::validate_skill;
use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Result, SkillError, SKILL_FILE};

/// Starting version stamped into scaffolded skills
const INITIAL_VERSION: &str = "0.0.1";

/// Conventional resource subdirectories created alongside SKILL.md
const SUBDIRS: &[&str] = &["scripts", "references", "assets"];

/// Scaffold a new skill directory under `parent`.
///
/// Writes a templated SKILL.md plus the three conventional
/// subdirectories, then runs the validator over the result; a name that
/// would not validate fails with [`SkillError::Invalid`] and the
/// partial directory is removed. Returns the created path.
pub fn init_skill(
    name: &str,
    parent: &Path,
    description: Option<&str>,
    schema: &SchemaConfig,
) -> Result<PathBuf> {
    let dest = parent.join(name);
    if dest.exists() {
        return Err(SkillError::AlreadyExists(dest));
    }

    let description = description
        .map(str::to_string)
        .unwrap_or_else(|| default_description(name));

    fs::create_dir_all(&dest)?;
    fs::write(
        dest.join(SKILL_FILE),
        compose_skill_md(&template_frontmatter(name, &description), &template_body(name))?,
    )?;
    for sub in SUBDIRS {
        fs::create_dir(dest.join(sub))?;
    }

    let result = validate_skill(&dest, schema)?;
    if !result.is_valid {
        fs::remove_dir_all(&dest)?;
        return Err(SkillError::Invalid {
            path: dest,
            count: result.error_count(),
        });
    }

    info!(skill = name, path = %dest.display(), "scaffolded skill");
    Ok(dest)
}

fn template_frontmatter(name: &str, description: &str) -> Mapping {
    let mut metadata = Mapping::new();
    metadata.insert(Value::from("version"), Value::from(INITIAL_VERSION));

    let mut map = Mapping::new();
    map.insert(Value::from("name"), Value::from(name));
    map.insert(Value::from("description"), Value::from(description));
    map.insert(Value::from("metadata"), Value::Mapping(metadata));
    map
}

fn default_description(name: &str) -> String {
    let topic = name.replace('-', " ");
    format!("Helps with {topic}. Use when the user asks about {topic}.")
}

fn template_body(name: &str) -> String {
    let title = title_case(name);
    format!(
        "# {title}\n\n\
         ## Overview\n\n\
         Explain what this skill does and the inputs it expects.\n\n\
         ## Instructions\n\n\
         1. Step one.\n\
         2. Step two.\n\n\
         ## Resources\n\n\
         Put executable helpers in `scripts/`, background material in\n\
         `references/`, and static files in `assets/`.\n"
    )
}

fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_a_valid_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let schema = SchemaConfig::default();
        let dest = init_skill("data-wrangler", tmp.path(), None, &schema).unwrap();

        assert!(dest.join("SKILL.md").is_file());
        for sub in SUBDIRS {
            assert!(dest.join(sub).is_dir());
        }

        let result = validate_skill(&dest, &schema).unwrap();
        assert!(result.is_valid, "findings: {:?}", result.findings);
    }

    #[test]
    fn test_init_rejects_bad_name_and_cleans_up() {
        let tmp = tempfile::tempdir().unwrap();
        let err = init_skill("Bad_Name", tmp.path(), None, &SchemaConfig::default()).unwrap_err();
        assert!(matches!(err, SkillError::Invalid { .. }));
        assert!(!tmp.path().join("Bad_Name").exists());
    }

    #[test]
    fn test_init_refuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("taken")).unwrap();
        let err = init_skill("taken", tmp.path(), None, &SchemaConfig::default()).unwrap_err();
        assert!(matches!(err, SkillError::AlreadyExists(_)));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("data-wrangler"), "Data Wrangler");
        assert_eq!(title_case("a"), "A");
    }
}
