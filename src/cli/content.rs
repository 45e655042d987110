//! External content moderation commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::args::{ContentFilterArgs, GlobalOptions};
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::models::ContentEntry;
use crate::client::{ListingApi, ModerationApi};
use crate::error::Result;
use crate::models::ContentDisplay;

/// Run the content list command
pub async fn list(
    opts: &GlobalOptions,
    filters: &ContentFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let filter_params = filters.to_params();
    run_list_command::<ContentEntry, ContentDisplay, _, _>(
        opts,
        pagination,
        "content entries",
        |client, params| async move { client.list_content(&filter_params, Some(&params)).await },
    )
    .await
}

/// Run the content approve command
pub async fn approve(
    opts: &GlobalOptions,
    content_id: &str,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    moderate(opts, content_id, yes, dry_run, Action::Approve).await
}

/// Run the content reject command
pub async fn reject(
    opts: &GlobalOptions,
    content_id: &str,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    moderate(opts, content_id, yes, dry_run, Action::Reject).await
}

enum Action {
    Approve,
    Reject,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::Approve => "approve",
            Action::Reject => "reject",
        }
    }

    fn past(&self) -> &'static str {
        match self {
            Action::Approve => "Approved",
            Action::Reject => "Rejected",
        }
    }
}

/// Shared approve/reject flow: confirm, mutate, report the new state.
async fn moderate(
    opts: &GlobalOptions,
    content_id: &str,
    yes: bool,
    dry_run: bool,
    action: Action,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    if dry_run {
        println!("Would {} content {}", action.verb(), content_id.bold());
        return Ok(());
    }

    if !yes {
        let prompt = format!("{} content {}?", capitalize(action.verb()), content_id);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let entry: ContentEntry = match action {
        Action::Approve => ctx.client.approve_content(content_id).await?,
        Action::Reject => ctx.client.reject_content(content_id).await?,
    };

    println!(
        "{} {} content: {} ({}, now {})",
        "✓".green(),
        action.past(),
        entry.title.bold(),
        entry.id,
        entry.state
    );

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
