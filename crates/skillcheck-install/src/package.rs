//! `.skill` archive creation

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use tracing::{debug, info};

use skillcheck_core::{load_skill, validate_skill};
use skillcheck_schema::{PackagingConfig, SchemaConfig};
use skillcheck_types::{Result, SkillError};

/// Package a skill directory into a distributable `<name>.skill`
/// gzip tarball, rooted at the skill name.
///
/// The skill is validated first and refused with
/// [`SkillError::Invalid`] when it has error findings. Junk entries
/// and (by default) dotfiles are left out of the archive.
pub fn package_skill(
    src: &Path,
    output_dir: Option<&Path>,
    schema: &SchemaConfig,
    packaging: &PackagingConfig,
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

    let out_dir = output_dir.unwrap_or(&packaging.output_dir);
    fs::create_dir_all(out_dir)?;
    let archive_path = out_dir.join(format!("{name}.skill"));

    let file = File::create(&archive_path)?;
    let encoder = GzEncoder::new(file, Compression::best());
    let mut builder = tar::Builder::new(encoder);

    append_dir(&mut builder, src, Path::new(&name), packaging)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    info!(skill = %name, archive = %archive_path.display(), "packaged skill");
    Ok(archive_path)
}

fn append_dir(
    builder: &mut tar::Builder<GzEncoder<File>>,
    dir: &Path,
    archive_prefix: &Path,
    packaging: &PackagingConfig,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if packaging.exclude_names.contains(&file_name)
            || (!packaging.include_dotfiles && file_name.starts_with('.'))
        {
            debug!(name = %file_name, "excluded from archive");
            continue;
        }

        let path = entry.path();
        let archive_name = archive_prefix.join(&file_name);
        if path.is_dir() {
            append_dir(builder, &path, &archive_name, packaging)?;
        } else if path.is_file() {
            builder.append_path_with_name(&path, &archive_name)?;
        }
    }
    Ok(())
}
