//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags from the CLI into a single unit so handler
/// signatures stay small. Precedence for each option is CLI flag >
/// environment variable > config file > built-in default; this struct
/// captures the CLI/env layer, and `CommandContext` resolves the rest.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json); falls back to the config preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.cycleops/config.yaml)
    pub config: Option<String>,

    /// Platform API base URL override
    pub api_url: Option<String>,

    /// OIDC issuer base URL override
    pub issuer_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            issuer_url: cli.issuer_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
