//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::ListParams;
use crate::client::pagination::SortOrder;

use super::SortDir;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<usize>,

    /// Column to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, hide_possible_values = true)]
    pub sort_dir: Option<SortDir>,
}

impl PaginationArgs {
    /// Convert CLI args to API list params.
    pub fn to_params(&self) -> ListParams {
        let mut params = ListParams::new();

        if let Some(limit) = self.limit {
            params = params.limit(limit);
        }
        // Without a limit, ListParams falls back to the default page size

        if let Some(offset) = self.offset {
            params = params.offset(offset);
        }
        if let Some(ref column) = self.sort_by {
            params = params.sort_by(column);
        }
        if let Some(dir) = self.sort_dir {
            let order = match dir {
                SortDir::Asc => SortOrder::Asc,
                SortDir::Desc => SortOrder::Desc,
            };
            params = params.sort_order(order);
        }

        params
    }
}
