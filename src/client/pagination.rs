//! List-request parameters
//!
//! All list endpoints take offset-based pagination (`limit`, `offset`) plus an
//! `orderBy` parameter in `"<column> <asc|desc>"` form. Filters specific to a
//! resource live next to the shared params here.

use crate::client::models::{ContentState, ContentType};

/// Page size sent when the caller does not pick one
pub const DEFAULT_LIMIT: usize = 50;

/// Sort order for list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9, oldest first)
    Asc,
    /// Descending order (Z-A, 9-0, newest first)
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Shared pagination and ordering parameters for list requests.
///
/// Use the builder pattern to configure:
/// ```ignore
/// let params = ListParams::new().limit(25).offset(50).sort_by("createdAt");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Number of items to return (default: [`DEFAULT_LIMIT`])
    pub limit: Option<usize>,
    /// Number of items to skip
    pub offset: Option<usize>,
    /// Column to order by
    pub sort_by: Option<String>,
    /// Sort order; `asc` when a column is set without one
    pub sort_order: Option<SortOrder>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort_by(mut self, column: impl Into<String>) -> Self {
        self.sort_by = Some(column.into());
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Convert to query string parameters.
    ///
    /// `limit` is always included so a page boundary exists even when the
    /// caller never set one; `offset` and `orderBy` only when configured.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        params.push(("limit", limit.to_string()));

        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }

        if let Some(ref column) = self.sort_by {
            let order = self.sort_order.unwrap_or(SortOrder::Asc);
            params.push(("orderBy", format!("{} {}", column, order.as_str())));
        }

        params
    }

    /// Check if any parameters are set.
    pub fn is_empty(&self) -> bool {
        self.limit.is_none()
            && self.offset.is_none()
            && self.sort_by.is_none()
            && self.sort_order.is_none()
    }
}

/// Filters for the external-content listing.
///
/// The server requires `type`; `state` narrows the moderation queue (admins
/// see everything but `rejected` by default).
#[derive(Debug, Clone)]
pub struct ContentFilterParams {
    pub content_type: ContentType,
    pub state: Option<ContentState>,
}

impl ContentFilterParams {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            state: None,
        }
    }

    pub fn state(mut self, state: ContentState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("type", self.content_type.as_str().to_string())];

        if let Some(state) = self.state {
            params.push(("state", state.as_str().to_string()));
        }

        params
    }
}

/// Filters for the initiative listing.
#[derive(Debug, Clone)]
pub struct InitiativeFilterParams {
    /// Include initiatives hidden from riders. On by default: moderation
    /// needs to see the whole catalogue.
    pub include_disabled: bool,
}

impl Default for InitiativeFilterParams {
    fn default() -> Self {
        Self {
            include_disabled: true,
        }
    }
}

impl InitiativeFilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled_only(mut self) -> Self {
        self.include_disabled = false;
        self
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        if self.include_disabled {
            vec![("includeDisabled", "true".to_string())]
        } else {
            Vec::new()
        }
    }
}
