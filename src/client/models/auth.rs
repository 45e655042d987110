//! Authentication wire models

use serde::{Deserialize, Serialize};

/// Stored access/refresh token pair.
///
/// Exactly one credential is active per session; it is replaced in place on
/// refresh and removed on logout or refresh failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer access token (a JWT; its payload carries the expiry claim)
    pub access_token: String,

    /// Longer-lived token exchanged for a fresh pair when the access token
    /// expires
    pub refresh_token: String,
}

/// Successful response from the issuer's token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,

    /// OIDC identity token; unused beyond the exchange itself
    #[serde(default)]
    pub id_token: Option<String>,

    /// Advisory lifetime in seconds. The authoritative expiry is the `exp`
    /// claim inside the access token.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl From<TokenResponse> for Credential {
    fn from(tokens: TokenResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// Error payload from the issuer's token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenErrorResponse {
    /// Human-readable rejection reason, preferring the server's
    /// `error_description` verbatim.
    pub fn message(self) -> Option<String> {
        self.error_description.or(self.error)
    }
}
