//! Validate-then-copy skill installation and removal

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use skillcheck_core::{load_skill, validate_skill};
use skillcheck_schema::SchemaConfig;
use skillcheck_types::{Result, SkillError};

use crate::agents::AgentSpec;

/// Install behavior switches.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstallOptions {
    /// Replace an existing install of the same skill
    pub force: bool,
    /// Install into the project-local skills directory instead of the
    /// user-level one
    pub project: bool,
}

/// Copy a local skill directory into an agent's skills directory.
///
/// The source is validated first; a skill with error findings is
/// refused with [`SkillError::Invalid`]. An occupied destination is
/// refused with [`SkillError::AlreadyExists`] unless `force` is set.
/// Returns the installed path.
pub fn install_skill(
    src: &Path,
    agent: &AgentSpec,
    schema: &SchemaConfig,
    opts: &InstallOptions,
) -> Result<PathBuf> {
    let result = validate_skill(src, schema)?;
    if !result.is_valid {
        return Err(SkillError::Invalid {
            path: src.to_path_buf(),
            count: result.error_count(),
        });
    }

    let skill = load_skill(src)?;
    let name = skill
        .get_str("name")
        .ok_or_else(|| SkillError::Parse("valid skill is missing its name".into()))?
        .to_string();

    // A packaged sibling of the same skill is ambiguous; the unpacked
    // directory wins and we say so.
    let packaged = src.with_extension("skill");
    if packaged.is_file() {
        warn!(
            packaged = %packaged.display(),
            "both a packaged and an unpacked copy exist, installing from the directory"
        );
    }

    let root = if opts.project {
        PathBuf::from(agent.project_skills_dir)
    } else {
        agent.user_skills_path().ok_or_else(|| {
            SkillError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "home directory not found",
            ))
        })?
    };

    let dest = root.join(&name);
    if dest.exists() {
        if !opts.force {
            return Err(SkillError::AlreadyExists(dest));
        }
        fs::remove_dir_all(&dest)?;
    }

    fs::create_dir_all(&root)?;
    copy_dir(src, &dest)?;
    info!(skill = %name, agent = agent.id, dest = %dest.display(), "installed skill");
    Ok(dest)
}

/// Remove an installed skill from an agent's skills directory.
///
/// Resolves the same user or project-local root as [`install_skill`]
/// and deletes `<root>/<name>`. A skill that is not installed there is
/// a distinct [`SkillError::NotFound`] outcome, so a caller sweeping
/// several agents can tell "removed" from "was never there". Returns
/// the removed path.
pub fn uninstall_skill(name: &str, agent: &AgentSpec, project: bool) -> Result<PathBuf> {
    let root = if project {
        PathBuf::from(agent.project_skills_dir)
    } else {
        agent.user_skills_path().ok_or_else(|| {
            SkillError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "home directory not found",
            ))
        })?
    };

    let path = root.join(name);
    let metadata = match fs::symlink_metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SkillError::NotFound(path));
        }
        Err(e) => return Err(e.into()),
    };

    // Symlinked installs are unlinked, never followed.
    if metadata.file_type().is_symlink() {
        fs::remove_file(&path)?;
    } else {
        fs::remove_dir_all(&path)?;
    }

    info!(skill = name, agent = agent.id, path = %path.display(), "uninstalled skill");
    Ok(path)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target)?;
        } else {
            warn!(path = %entry.path().display(), "skipping non-regular file");
        }
    }
    Ok(())
}
