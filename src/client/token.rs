//! Access-token payload decoding
//!
//! The access token is a JWT whose payload carries the `exp` claim. Decoding
//! here reads that claim WITHOUT verifying the signature: it is a client-side
//! expiry hint that decides when to refresh, never a trust boundary. The
//! server remains the authority on whether a token is actually valid.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Claims read from the access-token payload
#[derive(Debug, Deserialize)]
struct TokenClaims {
    /// Expiry as Unix-epoch seconds
    exp: i64,
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    // Add padding if needed
    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Extract the expiry instant from a JWT access token without verifying it.
pub fn decode_expiry(token: &str) -> Result<DateTime<Utc>> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken.into());
    }

    let payload = base64_decode_url(parts[1]).map_err(|_| ApiError::InvalidToken)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| ApiError::InvalidToken)?;

    DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| ApiError::InvalidToken.into())
}

/// Whether the token's decoded expiry is at or before the current instant.
///
/// A token that cannot be decoded counts as expired: the refresh exchange
/// then either replaces it with a good one or tears the session down.
pub fn is_expired(token: &str) -> bool {
    match decode_expiry(token) {
        Ok(expires_at) => expires_at <= Utc::now(),
        Err(_) => true,
    }
}
