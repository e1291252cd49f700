mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Validate, package, and install agent skills
#[derive(Parser)]
#[command(name = "skillcheck", version, about)]
struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one skill directory
    Validate {
        /// Skill directory to validate
        path: PathBuf,
        /// Optional TOML config overriding schema bounds
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit the result as JSON instead of findings
        #[arg(long)]
        json: bool,
    },
    /// Validate every skill found under the given roots
    CheckAll {
        /// Skill root directories to scan
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
        /// Optional TOML config overriding schema bounds
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List skills installed for detected agents
    List {
        /// Only this agent id
        #[arg(long)]
        agent: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which known agents are present on this machine
    Agents,
    /// Install a local skill directory for one or all detected agents
    Install {
        /// Skill directory to install
        skill_dir: PathBuf,
        /// Target agent id (see `skillcheck agents`)
        #[arg(long, conflicts_with = "all")]
        agent: Option<String>,
        /// Install for every detected agent
        #[arg(long)]
        all: bool,
        /// Install into the project-local skills directory
        #[arg(long)]
        project: bool,
        /// Replace an existing install
        #[arg(long)]
        force: bool,
    },
    /// Remove an installed skill from one or all detected agents
    Uninstall {
        /// Skill name to remove
        name: String,
        /// Target agent id (see `skillcheck agents`)
        #[arg(long, conflicts_with = "all")]
        agent: Option<String>,
        /// Remove from every detected agent
        #[arg(long)]
        all: bool,
        /// Remove from the project-local skills directory
        #[arg(long)]
        project: bool,
    },
    /// Package a skill directory into a .skill archive
    Package {
        /// Skill directory to package
        skill_dir: PathBuf,
        /// Output directory (defaults to the configured one)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Optional TOML config overriding schema and packaging options
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Scaffold a new skill directory
    Init {
        /// Skill name (lowercase letters, digits, hyphens)
        name: String,
        /// Parent directory to create the skill in
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Description for the frontmatter
        #[arg(long)]
        description: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    skillcheck_logging::init_logging(&cli.log_level)?;

    let exit_code = match cli.command {
        Command::Validate { path, config, json } => {
            commands::validate(&path, config.as_deref(), json)?
        }
        Command::CheckAll { dirs, config } => commands::check_all(&dirs, config.as_deref())?,
        Command::List { agent, json } => commands::list(agent.as_deref(), json)?,
        Command::Agents => commands::agents(),
        Command::Install {
            skill_dir,
            agent,
            all,
            project,
            force,
        } => commands::install(&skill_dir, agent.as_deref(), all, project, force)?,
        Command::Uninstall {
            name,
            agent,
            all,
            project,
        } => commands::uninstall(&name, agent.as_deref(), all, project)?,
        Command::Package {
            skill_dir,
            output,
            config,
        } => commands::package(&skill_dir, output.as_deref(), config.as_deref())?,
        Command::Init {
            name,
            path,
            description,
        } => commands::init(&name, &path, description.as_deref())?,
    };

    std::process::exit(exit_code);
}
