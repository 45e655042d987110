//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::token;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Cycleops Session Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_at(opts.config_ref())?;

    if let Some(url) = &opts.api_url {
        config.api_url = url.clone();
    }
    if let Some(url) = &opts.issuer_url {
        config.issuer_url = url.clone();
    }

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!("API: {}", config.api_url.cyan());
    println!("Issuer: {}", config.issuer_url.cyan());
    println!();

    match &config.credential {
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'cycleops login' to authenticate");
        }
        Some(credential) => match token::decode_expiry(&credential.access_token) {
            Ok(expires_at) => {
                let now = Utc::now();
                if expires_at <= now {
                    println!(
                        "{} Signed in, access token expired (will refresh on next command)",
                        "⚠".yellow()
                    );
                } else {
                    let remaining = expires_at.signed_duration_since(now);
                    let hours = remaining.num_hours();
                    let mins = remaining.num_minutes() % 60;

                    println!(
                        "{} Signed in (access token expires in {}h {}m)",
                        "✓".green(),
                        hours,
                        mins
                    );
                }
            }
            Err(_) => {
                println!(
                    "{} Signed in, access token unreadable (will refresh on next command)",
                    "⚠".yellow()
                );
            }
        },
    }

    println!();

    Ok(())
}
