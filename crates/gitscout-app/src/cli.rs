//! CLI argument definitions for the gitscout binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Gitscout — a conversational status endpoint for a GitHub repository.
#[derive(Parser, Debug)]
#[command(name = "gitscout", version, about)]
pub struct CliArgs {
    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Path to a .env file to load before reading configuration.
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the API server port.
    ///
    /// Priority: --port flag > GITSCOUT_PORT env var (already folded into
    /// the config value) > default.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.port.unwrap_or(config_port)
    }

    /// Resolve the default log level for the tracing filter.
    ///
    /// Priority: --log-level flag > "info". RUST_LOG still overrides both.
    pub fn resolve_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
