//! Cycleops CLI - Admin companion for the CycleRewards platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ContentCommands, InitiativeCommands, UserCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login => cli::login::run(&opts).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("cycleops version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::List { pagination } => cli::user::list(&opts, &pagination).await,
            UserCommands::Get { user_id } => cli::user::get(&opts, &user_id).await,
            UserCommands::Verify {
                user_id,
                yes,
                dry_run,
            } => cli::user::verify(&opts, &user_id, yes, dry_run).await,
            UserCommands::Delete {
                user_id,
                yes,
                dry_run,
            } => cli::user::delete(&opts, &user_id, yes, dry_run).await,
        },
        Commands::Initiative(initiative_cmd) => match initiative_cmd {
            InitiativeCommands::List { pagination, filters } => {
                cli::initiative::list(&opts, &pagination, &filters).await
            }
            InitiativeCommands::Get { initiative_id } => {
                cli::initiative::get(&opts, &initiative_id).await
            }
        },
        Commands::Content(content_cmd) => match content_cmd {
            ContentCommands::List {
                filters,
                pagination,
            } => cli::content::list(&opts, &filters, &pagination).await,
            ContentCommands::Approve {
                content_id,
                yes,
                dry_run,
            } => cli::content::approve(&opts, &content_id, yes, dry_run).await,
            ContentCommands::Reject {
                content_id,
                yes,
                dry_run,
            } => cli::content::reject(&opts, &content_id, yes, dry_run).await,
        },
        Commands::Metrics => cli::metrics::show(&opts).await,
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
