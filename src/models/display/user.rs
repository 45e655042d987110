//! Rider account display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_dash, yes_no};
use crate::client::models::User;

/// Rider row for `user list` output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    /// User ID
    #[tabled(rename = "USER ID")]
    pub id: String,

    /// Login handle
    #[tabled(rename = "USERNAME")]
    pub username: String,

    /// Display name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Email address
    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// Staff verification state
    #[tabled(rename = "VERIFIED")]
    pub verified: String,

    /// Credits earned
    #[tabled(rename = "CREDITS")]
    pub credits: String,

    /// Trips recorded
    #[tabled(rename = "TRIPS")]
    pub trips: u64,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: or_dash(&user.username),
            name: or_dash(&user.name),
            email: or_dash(&user.email),
            verified: yes_no(user.verified),
            credits: format!("{:.1}", user.credits),
            trips: user.trip_count,
        }
    }
}

/// Expanded rider record for `user get` output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDetailDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "VERIFIED")]
    pub verified: String,

    #[tabled(rename = "CREDITS")]
    pub credits: String,

    #[tabled(rename = "TRIPS")]
    pub trips: u64,

    /// Total distance ridden, in kilometers
    #[tabled(rename = "DISTANCE (KM)")]
    pub distance_km: String,

    /// Title of the initiative this rider supports
    #[tabled(rename = "INITIATIVE")]
    pub initiative: String,

    #[tabled(rename = "JOINED")]
    pub joined: String,

    /// Presigned profile-picture URL, when one exists
    #[tabled(rename = "PICTURE")]
    pub picture: String,
}

impl UserDetailDisplay {
    /// Build the detail row, attaching the separately fetched picture URL.
    pub fn new(user: User, picture_url: Option<String>) -> Self {
        let initiative = user
            .initiative
            .as_ref()
            .map(|i| i.title.clone())
            .or(user.initiative_id.clone())
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: user.id,
            username: or_dash(&user.username),
            name: or_dash(&user.name),
            email: or_dash(&user.email),
            verified: yes_no(user.verified),
            credits: format!("{:.1}", user.credits),
            trips: user.trip_count,
            distance_km: format!("{:.1}", user.total_dist),
            initiative,
            joined: format_date(user.created_at),
            picture: picture_url.unwrap_or_else(|| "--".to_string()),
        }
    }
}
