//! Login command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::config::Config;
use crate::error::Result;

/// Run the login command
///
/// Prompts for staff credentials and exchanges them at the issuer's token
/// endpoint. On success both tokens land in the config file; on rejection the
/// issuer's reason is shown and nothing is stored.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Sign in to the CycleRewards platform.".bold());
    println!();

    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .interact_text()?;

    let password: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    let ctx = CommandContext::new(opts)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Authenticating...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = ctx.client.login(&username, &password).await;
    spinner.finish_and_clear();
    result?;

    // Persist URL overrides next to the freshly stored credential so later
    // commands talk to the same deployment
    if opts.api_url.is_some() || opts.issuer_url.is_some() {
        let mut config = Config::load_at(opts.config_ref())?;
        if let Some(url) = &opts.api_url {
            config.api_url = url.clone();
        }
        if let Some(url) = &opts.issuer_url {
            config.issuer_url = url.clone();
        }
        config.save_at(opts.config_ref())?;
    }

    println!("{} Signed in as {}", "✓".green(), username.bold());

    println!("\n{}", "Try running:".bold());
    println!("  {} - Show session status", "cycleops status".cyan());
    println!("  {} - List rider accounts", "cycleops user list".cyan());
    println!(
        "  {} - Review pending content",
        "cycleops content list --type news --state pending".cyan()
    );

    Ok(())
}
