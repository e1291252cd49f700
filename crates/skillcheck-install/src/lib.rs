//! Skill installation, packaging, and scaffolding
//!
//! Everything here validates before it writes: a skill only gets
//! installed, packaged, or scaffolded if the validator core accepts it.

pub mod agents;
pub mod init;
pub mod install;
pub mod package;

pub use agents::AgentSpec;
pub use init::init_skill;
pub use install::{install_skill, uninstall_skill, InstallOptions};
pub use package::package_skill;
