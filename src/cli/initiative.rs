//! Initiative commands

use crate::cli::args::{GlobalOptions, InitiativeFilterArgs};
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::models::Initiative;
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;
use crate::models::InitiativeDisplay;
use crate::output::Formattable;

/// Run the initiative list command
pub async fn list(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    filters: &InitiativeFilterArgs,
) -> Result<()> {
    let filter_params = filters.to_params();
    run_list_command::<Initiative, InitiativeDisplay, _, _>(
        opts,
        pagination,
        "initiatives",
        |client, params| async move {
            client
                .list_initiatives(Some(&params), Some(&filter_params))
                .await
        },
    )
    .await
}

/// Run the initiative get command
pub async fn get(opts: &GlobalOptions, initiative_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let initiative = ctx.client.get_initiative(initiative_id).await?;
    vec![InitiativeDisplay::from(initiative)].print(ctx.format)?;

    Ok(())
}
