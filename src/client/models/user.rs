//! Rider account wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Initiative;

/// Rider account as returned by `/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: String,

    /// Login handle
    #[serde(default)]
    pub username: String,

    /// Display name (may be empty for accounts that never completed their
    /// profile)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Whether staff verified this account
    #[serde(default)]
    pub verified: bool,

    /// Credits earned by riding
    #[serde(default)]
    pub credits: f64,

    /// Total distance ridden, in kilometers
    #[serde(default)]
    pub total_dist: f64,

    #[serde(default)]
    pub trip_count: u64,

    /// Initiative this rider is currently supporting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative: Option<Initiative>,

    /// OIDC subject claim linked to this account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Presigned profile-picture URL from `/users/{id}/picture-get-url`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPicture {
    pub url: String,

    /// HTTP method the URL is signed for
    #[serde(default)]
    pub method: String,
}
