//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use log::debug;

use crate::browse::Browser;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::ContentClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

/// Context for command execution: resolved config, the browser over a live
/// content client, and the output format.
pub struct CommandContext {
    /// Config with CLI/env overrides applied
    pub config: Config,
    /// Fetch orchestration over the HTTP client (Arc-wrapped for spawned tasks)
    pub browser: Arc<Browser<ContentClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or fails validation.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.api_base_ref(), opts.stream_base_ref());
        config.validate()?;

        let client = Arc::new(ContentClient::new(
            &config.api_base,
            config.request_timeout(),
        )?);
        debug!("Content API: {}", client.base_url());
        debug!("Media host: {}", config.stream_base);
        let session = Arc::new(Session::new(config.cache.ttl()));
        let browser = Arc::new(Browser::new(client, session, &config));

        Ok(Self {
            config,
            browser,
            format: opts.format,
        })
    }
}
