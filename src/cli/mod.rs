//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod content;
pub mod context;
pub mod handlers;
pub mod initiative;
pub mod login;
pub mod logout;
pub mod metrics;
pub mod status;
pub mod user;

pub use args::{
    ContentFilterArgs, InitiativeFilterArgs, OutputFormat, PaginationArgs, SortDir,
};
pub use context::CommandContext;

/// Cycleops CLI - Admin companion for the CycleRewards platform
#[derive(Parser, Debug)]
#[command(name = "cycleops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CYCLEOPS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CYCLEOPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the platform API base URL
    #[arg(long, global = true, env = "CYCLEOPS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the OIDC issuer base URL
    #[arg(long, global = true, env = "CYCLEOPS_ISSUER_URL", hide_env = true)]
    pub issuer_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CYCLEOPS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with staff credentials
    Login,

    /// Sign out and remove stored tokens
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Browse and moderate rider accounts
    #[command(subcommand)]
    User(UserCommands),

    /// Browse sponsored initiatives
    #[command(subcommand)]
    Initiative(InitiativeCommands),

    /// Moderate external editorial content
    #[command(subcommand)]
    Content(ContentCommands),

    /// Show the aggregate analytics snapshot
    Metrics,

    /// Generate shell completions
    #[command(after_help = "\
Completions:
  bash:   cycleops completion bash > /etc/bash_completion.d/cycleops
  zsh:    cycleops completion zsh > \"${fpath[1]}/_cycleops\"
  fish:   cycleops completion fish > ~/.config/fish/completions/cycleops.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Rider account subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List rider accounts
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one rider account, including its profile picture URL
    #[command(visible_alias = "g")]
    Get {
        /// User ID
        user_id: String,
    },

    /// Mark a rider account as verified
    Verify {
        /// User ID
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Preview without verifying
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Permanently delete a rider account
    #[command(after_help = "EXAMPLES:\n  \
            cycleops user delete 4f1f...      # With confirmation\n  \
            cycleops user delete 4f1f... --yes\n  \
            cycleops user delete 4f1f... --dry-run")]
    Delete {
        /// User ID
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Preview without deleting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },
}

/// Initiative subcommands
#[derive(Subcommand, Debug)]
pub enum InitiativeCommands {
    /// List sponsored initiatives (disabled ones included)
    List {
        #[command(flatten)]
        pagination: PaginationArgs,

        #[command(flatten)]
        filters: InitiativeFilterArgs,
    },

    /// Show one initiative
    #[command(visible_alias = "g")]
    Get {
        /// Initiative ID
        initiative_id: String,
    },
}

/// External content subcommands
#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// List external content entries of one type
    #[command(after_help = "EXAMPLES:\n  \
            cycleops content list --type news\n  \
            cycleops content list --type event --state pending\n  \
            cycleops content list --type news --format json | jq '.data'")]
    List {
        #[command(flatten)]
        filters: ContentFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Approve an entry for publication
    Approve {
        /// Content ID
        content_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Preview without approving
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Reject an entry
    Reject {
        /// Content ID
        content_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Preview without rejecting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },
}
