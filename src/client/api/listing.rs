//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{ContentEntry, Initiative, User};
use crate::client::pagination::{ContentFilterParams, InitiativeFilterParams, ListParams};
use crate::error::Result;

/// Collection listing operations
///
/// Every listing takes the shared `limit`/`offset`/`orderBy` parameters;
/// resource-specific filters ride alongside.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// List rider accounts
    async fn list_users(&self, params: Option<&ListParams>) -> Result<Vec<User>>;

    /// List sponsored initiatives
    async fn list_initiatives(
        &self,
        params: Option<&ListParams>,
        filters: Option<&InitiativeFilterParams>,
    ) -> Result<Vec<Initiative>>;

    /// List external content entries of one type
    async fn list_content(
        &self,
        filters: &ContentFilterParams,
        params: Option<&ListParams>,
    ) -> Result<Vec<ContentEntry>>;
}
