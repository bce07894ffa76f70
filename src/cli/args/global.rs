//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.postdeck/config.yaml)
    pub config: Option<String>,

    /// Content API root override
    pub api_base: Option<String>,

    /// Media host override
    pub stream_base: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_base: cli.api_base.clone(),
            stream_base: cli.stream_base.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_base_ref(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    pub fn stream_base_ref(&self) -> Option<&str> {
        self.stream_base.as_deref()
    }
}
