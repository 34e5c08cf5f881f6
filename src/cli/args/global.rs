//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct captures
/// the CLI/env layer; config file values are merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, `None` when neither flag nor env var was given
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.ngms/config.yaml)
    pub config: Option<String>,

    /// Directory holding the token and cache databases
    pub data_dir: Option<String>,

    /// Bypass the response cache for this invocation
    pub no_cache: bool,

    /// API host override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            data_dir: cli.data_dir.clone(),
            no_cache: cli.no_cache,
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn data_dir_ref(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
