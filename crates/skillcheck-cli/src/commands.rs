//! Subcommand handlers
//!
//! Each handler returns the process exit code; printing conventions are
//! warnings to stdout, errors to stderr, machine output as JSON on
//! request.

use std::path::Path;

use anyhow::{bail, Context, Result};

use skillcheck_core::{load_skill, validate_skill, SkillRegistry};
use skillcheck_install::{
    agents, init_skill, install_skill, package_skill, uninstall_skill, InstallOptions,
};
use skillcheck_schema::ConfigFile;
use skillcheck_types::ValidationResult;

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    ConfigFile::load_or_default(path).context("failed to load configuration")
}

fn print_findings(result: &ValidationResult) {
    for finding in &result.findings {
        if finding.is_error() {
            eprintln!("{finding}");
        } else {
            println!("{finding}");
        }
    }
}

pub fn validate(path: &Path, config: Option<&Path>, json: bool) -> Result<i32> {
    let config = load_config(config)?;
    let result = validate_skill(path, &config.validation)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_findings(&result);
        if result.is_valid {
            println!(
                "{}: valid ({} warning(s))",
                path.display(),
                result.warning_count()
            );
        } else {
            eprintln!(
                "{}: invalid ({} error(s), {} warning(s))",
                path.display(),
                result.error_count(),
                result.warning_count()
            );
        }
    }

    Ok(if result.is_valid { 0 } else { 1 })
}

pub fn check_all(dirs: &[std::path::PathBuf], config: Option<&Path>) -> Result<i32> {
    let config = load_config(config)?;
    let mut registry = SkillRegistry::new();
    for dir in dirs {
        registry = registry.add_directory(dir);
    }

    let results = registry.validate_all(&config.validation);
    let mut invalid = 0usize;

    for result in &results {
        if result.is_valid {
            println!("ok      {}", result.path.display());
        } else {
            invalid += 1;
            println!("FAILED  {}", result.path.display());
            print_findings(result);
        }
    }
    println!("{} skill(s) checked, {} invalid", results.len(), invalid);

    Ok(if invalid == 0 { 0 } else { 1 })
}

pub fn list(agent_filter: Option<&str>, json: bool) -> Result<i32> {
    let selected: Vec<&agents::AgentSpec> = match agent_filter {
        Some(id) => match agents::find(id) {
            Some(agent) => vec![agent],
            None => bail!("unknown agent '{id}'"),
        },
        None => agents::detect(),
    };

    let mut entries = Vec::new();
    for agent in selected {
        let Some(skills_dir) = agent.user_skills_path() else {
            continue;
        };
        for path in SkillRegistry::new().add_directory(&skills_dir).discover() {
            let name = match load_skill(&path) {
                Ok(skill) => skill.get_str("name").unwrap_or_default().to_string(),
                Err(_) => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            entries.push((agent.id, name, path));
        }
    }

    if json {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(agent, name, path)| {
                serde_json::json!({ "agent": agent, "name": name, "path": path })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if entries.is_empty() {
        println!("no skills installed");
    } else {
        for (agent, name, path) in &entries {
            println!("{agent:<10} {name:<30} {}", path.display());
        }
    }

    Ok(0)
}

pub fn agents() -> i32 {
    for agent in agents::AGENTS {
        let status = if agent.is_installed() {
            "detected"
        } else {
            "not found"
        };
        println!("{:<10} {:<12} {}", agent.id, status, agent.display_name);
    }
    0
}

fn resolve_targets(agent_id: Option<&str>, all: bool) -> Result<Vec<&'static agents::AgentSpec>> {
    if all {
        let detected = agents::detect();
        if detected.is_empty() {
            bail!("no agents detected on this machine");
        }
        Ok(detected)
    } else {
        let id = agent_id.context("pass --agent <id> or --all")?;
        match agents::find(id) {
            Some(agent) => Ok(vec![agent]),
            None => bail!("unknown agent '{id}'"),
        }
    }
}

pub fn install(
    skill_dir: &Path,
    agent_id: Option<&str>,
    all: bool,
    project: bool,
    force: bool,
) -> Result<i32> {
    let targets = resolve_targets(agent_id, all)?;
    let config = load_config(None)?;
    let opts = InstallOptions { force, project };

    for agent in targets {
        let dest = install_skill(skill_dir, agent, &config.validation, &opts)
            .with_context(|| format!("install for {} failed", agent.id))?;
        println!("installed for {}: {}", agent.id, dest.display());
    }

    Ok(0)
}

pub fn uninstall(name: &str, agent_id: Option<&str>, all: bool, project: bool) -> Result<i32> {
    let targets = resolve_targets(agent_id, all)?;
    let mut removed = 0usize;

    for agent in targets {
        match uninstall_skill(name, agent, project) {
            Ok(path) => {
                removed += 1;
                println!("removed from {}: {}", agent.id, path.display());
            }
            Err(skillcheck_types::SkillError::NotFound(_)) => {
                println!("not installed for {}", agent.id);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("uninstall for {} failed", agent.id));
            }
        }
    }

    Ok(if removed > 0 { 0 } else { 1 })
}

pub fn package(skill_dir: &Path, output: Option<&Path>, config: Option<&Path>) -> Result<i32> {
    let config = load_config(config)?;
    let archive = package_skill(skill_dir, output, &config.validation, &config.packaging)?;
    println!("created {}", archive.display());
    Ok(0)
}

pub fn init(name: &str, parent: &Path, description: Option<&str>) -> Result<i32> {
    let config = load_config(None)?;
    let dest = init_skill(name, parent, description, &config.validation)?;
    println!("created {}", dest.display());
    Ok(0)
}
