use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system for a CLI tool.
///
/// Diagnostics go to stderr so findings printed on stdout stay machine
/// readable, in compact single-line form, with ANSI colors only when
/// stderr is a terminal (pipes and CI logs stay clean). `RUST_LOG`
/// overrides the supplied default level.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
