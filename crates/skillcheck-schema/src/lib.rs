//! Schema configuration for skill validation
//!
//! The bounds and recognized key sets every rule evaluates against, loaded
//! once per run from an optional TOML file and read-only thereafter.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use skillcheck_types::{Result, SkillError};

/// Default lower bound on name length
pub const DEFAULT_MIN_NAME_LENGTH: usize = 1;
/// Default upper bound on name length
pub const DEFAULT_MAX_NAME_LENGTH: usize = 64;
/// Default lower bound on description length (after trimming)
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 20;
/// Default upper bound on description length
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Validation bounds and recognized key sets.
///
/// Immutable for the lifetime of a validation run; rules only borrow it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Minimum skill name length
    pub min_name_length: usize,
    /// Maximum skill name length
    pub max_name_length: usize,
    /// Minimum description length after trimming whitespace
    pub min_description_length: usize,
    /// Maximum description length
    pub max_description_length: usize,
    /// Recognized top-level frontmatter keys; others warn
    pub allowed_properties: BTreeSet<String>,
    /// Recognized keys under `metadata`; others warn
    pub recognized_metadata_keys: BTreeSet<String>,
    /// Conventional optional subdirectories; others warn
    pub optional_subdirectories: BTreeSet<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            allowed_properties: string_set(&[
                "name",
                "description",
                "license",
                "allowed-tools",
                "metadata",
            ]),
            recognized_metadata_keys: string_set(&["version", "category", "author"]),
            optional_subdirectories: string_set(&["scripts", "references", "assets"]),
        }
    }
}

impl SchemaConfig {
    /// Load the `[validation]` section from a TOML config file.
    ///
    /// A missing or malformed file is a hard error; callers wanting
    /// defaults on absence use [`ConfigFile::load_or_default`].
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigFile::load(path)?.validation)
    }
}

/// Packaging options for `.skill` archive creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    /// Directory `.skill` files are written into
    pub output_dir: PathBuf,
    /// Entry names excluded from archives
    pub exclude_names: BTreeSet<String>,
    /// Whether dotfiles are packaged
    pub include_dotfiles: bool,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            exclude_names: string_set(&[".DS_Store", "__pycache__", ".git", "node_modules"]),
            include_dotfiles: false,
        }
    }
}

/// Full on-disk configuration: `[validation]` and `[packaging]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub validation: SchemaConfig,
    pub packaging: PackagingConfig,
}

impl ConfigFile {
    /// Load and parse a TOML config file. Strict: any read or parse
    /// failure is a `SkillError::Config` naming the file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SkillError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| SkillError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Explicit-fallback variant: no source means built-in defaults,
    /// a provided source is still loaded strictly.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

fn string_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let schema = SchemaConfig::default();
        assert_eq!(schema.min_name_length, 1);
        assert_eq!(schema.max_name_length, 64);
        assert_eq!(schema.min_description_length, 20);
        assert!(schema.allowed_properties.contains("name"));
        assert!(schema.recognized_metadata_keys.contains("version"));
        assert!(schema.optional_subdirectories.contains("scripts"));
    }

    #[test]
    fn test_load_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[validation]\nmax_name_length = 32\nmin_description_length = 10\n\n\
             [packaging]\noutput_dir = \"out\"\n"
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.validation.max_name_length, 32);
        assert_eq!(config.validation.min_description_length, 10);
        // Untouched fields keep defaults
        assert_eq!(config.validation.min_name_length, 1);
        assert_eq!(config.packaging.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[validation\nmax_name_length = ").unwrap();

        match ConfigFile::load(file.path()) {
            Err(SkillError::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let err = ConfigFile::load(Path::new("/nonexistent/skillcheck.toml")).unwrap_err();
        assert!(matches!(err, SkillError::Config { .. }));
    }

    #[test]
    fn test_load_or_default_without_source() {
        let config = ConfigFile::load_or_default(None).unwrap();
        assert_eq!(config.validation.max_name_length, DEFAULT_MAX_NAME_LENGTH);
    }
}
