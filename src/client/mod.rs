//! Platform API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod models;
pub mod pagination;
pub mod platform;
pub mod session;
pub mod token;

pub use api::{AuthApi, DetailApi, ListingApi, ModerationApi};
#[allow(unused_imports)]
pub use pagination::{
    ContentFilterParams, DEFAULT_LIMIT, InitiativeFilterParams, ListParams, SortOrder,
};
pub use platform::PlatformClient;
pub use session::{CredentialStore, FileCredentialStore};
