//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard
//! flow:
//! 1. Create command context
//! 2. Fetch data with pagination
//! 3. Apply limit
//! 4. Convert to display type
//! 5. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::{ListParams, PlatformClient};
use crate::error::Result;
use crate::output::Formattable;

/// Run a standard list command with the common fetch → limit → display →
/// print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `User`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, `Serialize`
/// * `Fut` - The future type returned by the fetcher
///
/// # Example
///
/// ```ignore
/// run_list_command::<User, UserDisplay, _, _>(
///     opts,
///     pagination,
///     "users",
///     |client, params| async move { client.list_users(Some(&params)).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: 'static,
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<PlatformClient>, ListParams) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    debug!("Fetching {}", resource_name);

    let mut params = pagination.to_params();
    if params.limit.is_none() {
        params.limit = Some(ctx.config.preferences.limit);
    }
    let items = fetcher(ctx.client.clone(), params).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    // The server already pages, but apply the limit locally too in case it
    // returns more than asked
    let limited_items: Vec<T> = if let Some(limit) = pagination.limit {
        items.into_iter().take(limit).collect()
    } else {
        items
    };

    let display_items: Vec<D> = limited_items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
