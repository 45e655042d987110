//! Rider account commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::models::User;
use crate::client::{DetailApi, ListingApi, ModerationApi};
use crate::error::Result;
use crate::models::{UserDetailDisplay, UserDisplay};
use crate::output::Formattable;

/// Run the user list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<User, UserDisplay, _, _>(opts, pagination, "users", |client, params| {
        async move { client.list_users(Some(&params)).await }
    })
    .await
}

/// Run the user get command
///
/// The record and its presigned picture URL live on different endpoints;
/// both are fetched concurrently and a missing picture is not an error.
pub async fn get(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let (user, picture) = futures::join!(
        ctx.client.get_user(user_id),
        ctx.client.get_user_picture(user_id)
    );

    let user = user?;
    let picture_url = picture.ok().map(|p| p.url);

    vec![UserDetailDisplay::new(user, picture_url)].print(ctx.format)?;

    Ok(())
}

/// Run the user verify command
pub async fn verify(opts: &GlobalOptions, user_id: &str, yes: bool, dry_run: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    if dry_run {
        println!("Would verify user {}", user_id.bold());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Verify user {}?", user_id))
            .default(true)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let user = ctx.client.verify_user(user_id).await?;
    println!(
        "{} Verified user: {} ({})",
        "✓".green(),
        label(&user).bold(),
        user.id
    );

    Ok(())
}

/// Run the user delete command
pub async fn delete(opts: &GlobalOptions, user_id: &str, yes: bool, dry_run: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    if dry_run {
        println!("Would delete user {}", user_id.bold());
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Permanently delete user {}? This cannot be undone.",
                user_id
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let user = ctx.client.delete_user(user_id).await?;
    println!(
        "{} Deleted user: {} ({})",
        "✓".green(),
        label(&user).bold(),
        user.id
    );

    Ok(())
}

/// Best human label for a rider in confirmation output
fn label(user: &User) -> String {
    if !user.name.is_empty() {
        user.name.clone()
    } else if !user.username.is_empty() {
        user.username.clone()
    } else {
        user.email.clone()
    }
}
