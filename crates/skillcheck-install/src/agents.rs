//! Known AI agent registry
//!
//! A static ordered table of agents that consume skills. Detection is a
//! path-existence check on each agent's home directory, so supporting a
//! new agent is a data edit here, not new code.

use std::path::PathBuf;

/// One agent that consumes skills.
#[derive(Debug)]
pub struct AgentSpec {
    /// Short identifier used on the CLI, e.g. `claude`
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Agent home, relative to the user's home directory
    home_subdir: &'static str,
    /// Environment variable overriding the agent home, if the agent has one
    env_home: Option<&'static str>,
    /// Project-local skills directory, relative to the project root
    pub project_skills_dir: &'static str,
}

/// Registry of known agents, in display order.
pub const AGENTS: &[AgentSpec] = &[
    AgentSpec {
        id: "claude",
        display_name: "Claude Code",
        home_subdir: ".claude",
        env_home: None,
        project_skills_dir: ".claude/skills",
    },
    AgentSpec {
        id: "codex",
        display_name: "Codex",
        home_subdir: ".codex",
        env_home: Some("CODEX_HOME"),
        project_skills_dir: ".codex/skills",
    },
    AgentSpec {
        id: "opencode",
        display_name: "OpenCode",
        home_subdir: ".config/opencode",
        env_home: None,
        project_skills_dir: ".opencode/skills",
    },
    AgentSpec {
        id: "cursor",
        display_name: "Cursor",
        home_subdir: ".cursor",
        env_home: None,
        project_skills_dir: ".cursor/skills",
    },
    AgentSpec {
        id: "windsurf",
        display_name: "Windsurf",
        home_subdir: ".codeium/windsurf",
        env_home: None,
        project_skills_dir: ".windsurf/skills",
    },
];

impl AgentSpec {
    /// The agent's home directory, honoring its env override.
    fn home_dir(&self) -> Option<PathBuf> {
        if let Some(var) = self.env_home {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    return Some(PathBuf::from(value));
                }
            }
        }
        dirs::home_dir().map(|home| home.join(self.home_subdir))
    }

    /// Where user-level skills for this agent live
    pub fn user_skills_path(&self) -> Option<PathBuf> {
        self.home_dir().map(|base| base.join("skills"))
    }

    /// True when the agent's home directory exists on this machine
    pub fn is_installed(&self) -> bool {
        self.home_dir().is_some_and(|base| base.exists())
    }
}

/// Look up an agent by id.
pub fn find(id: &str) -> Option<&'static AgentSpec> {
    AGENTS.iter().find(|a| a.id == id)
}

/// All agents detected on this machine, in registry order.
pub fn detect() -> Vec<&'static AgentSpec> {
    AGENTS.iter().filter(|a| a.is_installed()).collect()
}
