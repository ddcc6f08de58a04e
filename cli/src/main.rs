//! Accessors CLI - prints the demonstration trace.
//!
//! ```text
//! main() -> AccessorsConfig::load() -> init_tracing(level) -> run_demo(demo) -> stdout
//! ```
//!
//! Logs go to stderr so stdout carries only the trace.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use accessors_config::AccessorsConfig;
use accessors_core::run_demo;

const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG` wins, then the configured level, then `info`.
fn init_tracing(config_level: Option<&str>) -> Vec<String> {
    let mut warnings = Vec::new();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| match config_level {
            Some(level) => EnvFilter::try_new(level).inspect_err(|e| {
                warnings.push(format!("Invalid log level {level:?} in config: {e}"));
            }),
            None => EnvFilter::try_new(DEFAULT_LOG_LEVEL),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
    warnings
}

fn main() -> Result<()> {
    let (config, mut init_warnings) = AccessorsConfig::load();
    let loaded = config.is_some();
    let config = config.unwrap_or_default();

    init_warnings.extend(init_tracing(config.log_level()));
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
    if loaded && let Some(path) = AccessorsConfig::path() {
        tracing::info!(path = %path.display(), "Loaded config");
    }

    let trace = run_demo(config.demo()).context("failed to build demo trace")?;

    let mut out = io::stdout().lock();
    write!(out, "{trace}").context("failed to write trace")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
