//! Frontmatter extraction
//!
//! A skill definition file starts with a `---` marker line, a YAML
//! mapping, and a matching closing marker; everything after is body
//! text and is carried verbatim.

use regex::Regex;
use serde_yaml::{Mapping, Value};

use skillcheck_types::{Result, SkillError};

/// Split raw SKILL.md text into its decoded frontmatter mapping and body.
///
/// Fails with [`SkillError::Parse`] when the opening marker is absent,
/// the closing marker is missing, or the enclosed content is not a YAML
/// mapping. An empty block yields an empty mapping, leaving the
/// missing-field reporting to the rules. The body is returned exactly
/// as written, unparsed.
pub fn parse_frontmatter(raw: &str) -> Result<(Mapping, String)> {
    if !raw.starts_with("---") {
        return Err(SkillError::Parse(
            "file must start with a '---' frontmatter marker".into(),
        ));
    }

    let re = Regex::new(r"(?sm)\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?$\n?(.*)\z")
        .map_err(|e| SkillError::Parse(format!("frontmatter regex failed to compile: {e}")))?;

    let captures = re
        .captures(raw)
        .ok_or_else(|| SkillError::Parse("missing closing '---' frontmatter marker".into()))?;

    let yaml_str = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let value: Value = serde_yaml::from_str(yaml_str)
        .map_err(|e| SkillError::Parse(format!("invalid YAML in frontmatter: {e}")))?;

    match value {
        Value::Mapping(map) => Ok((map, body.to_string())),
        // An empty block decodes to Null; hand it back as an empty
        // mapping so the field rules can name what is missing.
        Value::Null => Ok((Mapping::new(), body.to_string())),
        _ => Err(SkillError::Parse(
            "frontmatter must be a YAML mapping of keys to values".into(),
        )),
    }
}

/// Render a frontmatter mapping and body back into SKILL.md text.
///
/// Output round-trips through [`parse_frontmatter`] to an equal mapping
/// and identical body.
pub fn compose_skill_md(frontmatter: &Mapping, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(frontmatter)
        .map_err(|e| SkillError::Parse(format!("cannot serialize frontmatter: {e}")))?;
    Ok(format!("---\n{yaml}---\n{body}"))
}
