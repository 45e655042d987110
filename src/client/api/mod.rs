//! API traits for the platform client
//!
//! The client surface is split by concern: authentication, collection
//! listing, single-record detail, and moderation mutations.

mod auth;
mod detail;
mod listing;
mod moderation;

pub use auth::AuthApi;
pub use detail::DetailApi;
pub use listing::ListingApi;
pub use moderation::ModerationApi;
