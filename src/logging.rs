//! Tracing subscriber setup for the `billdeck` binary.
//!
//! Logs always go to stderr so stdout stays one JSON document per line.
//!
//! Filter priority, highest first:
//!
//! 1. `BILLDECK_LOG` (e.g. `billdeck=debug,warn`)
//! 2. `RUST_LOG`
//! 3. `-v` / `-q` flags
//! 4. `warn`

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Project-specific filter variable
pub const LOG_ENV_VAR: &str = "BILLDECK_LOG";

/// Verbosity level derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins if both flags are given
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Call once, before loading config or bills.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(
        verbosity,
        std::env::var(LOG_ENV_VAR).ok().as_deref(),
    );

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .compact();

    // A subscriber may already be installed (e.g. by an embedding host)
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn build_env_filter(verbosity: Verbosity, project_directives: Option<&str>) -> EnvFilter {
    if let Some(filter) = project_directives.and_then(|d| EnvFilter::try_new(d).ok()) {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    let directive = match verbosity {
        Verbosity::Verbose => format!("{},billdeck=debug", level),
        _ => level.to_string(),
    };
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}
