//! Shared components for CLI commands
//!
//! This module contains the logging setup used across the command
//! implementations.

use crate::Result;
use tracing::debug;

/// Set up structured logging on stderr
///
/// Diagnostics go to stderr so stdout stays clean for summaries. `quiet`
/// switches to a compact format without timestamps.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bpr_reconciler={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("logging initialized at level: {}", log_level);
    Ok(())
}
