//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{FileCredentialStore, PlatformClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime
/// options.
///
/// The client is handed a file-backed credential store rooted at the resolved
/// config path, so token rotation during a command lands back in the config
/// file. No upfront authentication happens here: the client refreshes (or the
/// server rejects) on demand.
pub struct CommandContext {
    /// Effective configuration after CLI/env overrides
    pub config: Config,
    /// Platform API client (Arc-wrapped for concurrent request support)
    pub client: Arc<PlatformClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(url) = &opts.api_url {
            config.api_url = url.clone();
        }
        if let Some(url) = &opts.issuer_url {
            config.issuer_url = url.clone();
        }

        let store = Arc::new(FileCredentialStore::new(Config::resolve_path(
            opts.config_ref(),
        )?));

        let client = Arc::new(PlatformClient::new(
            config.api_url.clone(),
            config.issuer_url.clone(),
            config.client_id.clone(),
            config.client_secret.clone(),
            store,
        )?);

        // CLI flag wins, then the config preference, then table output
        let format = opts
            .format
            .or_else(|| match config.preferences.format.as_deref() {
                Some("json") => Some(OutputFormat::Json),
                Some("table") => Some(OutputFormat::Table),
                _ => None,
            })
            .unwrap_or_default();

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Fail fast with a pointer to `login` when no session exists.
    ///
    /// Protected commands call this for a friendlier message than the
    /// server's 401.
    pub fn require_session(&self) -> Result<()> {
        self.config.require_credential().map(|_| ())
    }
}
