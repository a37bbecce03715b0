// src/logging.rs

//! Diagnostic logging for `nestlog` using `tracing` + `tracing-subscriber`.
//!
//! This is separate from the event log the wrapper writes to `LOG_PATH`.
//! The level comes from the `NESTLOG_TRACE` environment variable (e.g.
//! "info", "debug") and defaults to `warn`, so a normal build sees nothing
//! from the wrapper on stderr.
//!
//! Logs are sent to STDERR so that the wrapped tool's stdout is untouched.

use anyhow::Result;
use tracing_subscriber::fmt;

use crate::config::EnvSnapshot;
use crate::config::model::TRACE_VAR;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(env: &EnvSnapshot) -> Result<()> {
    let level = env
        .get_str(TRACE_VAR)
        .and_then(parse_level_str)
        .unwrap_or(tracing::Level::WARN);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
