//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::Credential;
use crate::error::Result;

/// Credential lifecycle operations against the OIDC issuer
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a username/password pair for tokens and persist them.
    ///
    /// On rejection the issuer's `error_description` is surfaced verbatim and
    /// nothing is stored.
    async fn login(&self, username: &str, password: &str) -> Result<Credential>;

    /// Drop the persisted credential pair.
    fn logout(&self) -> Result<()>;
}
