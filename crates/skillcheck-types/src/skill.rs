//! Parsed skill definition

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// One candidate skill folder with its decoded SKILL.md.
///
/// The validator only ever reads the directory; ownership of the files
/// stays with the caller. `body` is carried verbatim and not inspected
/// beyond the frontmatter block.
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    /// Skill directory on disk
    pub path: PathBuf,
    /// Decoded frontmatter mapping (case-sensitive keys)
    pub frontmatter: Mapping,
    /// Everything after the closing frontmatter marker, unparsed
    pub body: String,
}

impl SkillDefinition {
    /// Create a definition from already-parsed parts
    pub fn new(path: impl Into<PathBuf>, frontmatter: Mapping, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            frontmatter,
            body: body.into(),
        }
    }

    /// Look up a top-level frontmatter value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.frontmatter.get(key)
    }

    /// Look up a top-level frontmatter value as a string, if it is one
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.frontmatter.get(key).and_then(Value::as_str)
    }

    /// Basename of the containing directory, lossy-decoded
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Path to the main definition file inside this skill
    pub fn skill_file(&self) -> PathBuf {
        self.path.join(crate::SKILL_FILE)
    }
}

/// Convenience for tests and generators: build a mapping from string pairs.
pub fn mapping_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Mapping {
    let mut map = Mapping::new();
    for (k, v) in pairs {
        map.insert(Value::from(k), Value::from(v));
    }
    map
}

impl AsRef<Path> for SkillDefinition {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let fm = mapping_from_pairs([("name", "my-skill"), ("description", "does things")]);
        let skill = SkillDefinition::new("/skills/my-skill", fm, "# My Skill\n");
        assert_eq!(skill.get_str("name"), Some("my-skill"));
        assert_eq!(skill.get_str("missing"), None);
        assert_eq!(skill.dir_name(), "my-skill");
        assert!(skill.skill_file().ends_with("SKILL.md"));
    }
}
