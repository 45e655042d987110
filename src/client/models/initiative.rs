//! Sponsored-initiative wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sponsored cause that riders earn credits for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Credit goal for completion
    #[serde(default)]
    pub goal: f64,

    /// Credits accumulated so far
    #[serde(default)]
    pub credits: f64,

    /// Disabled initiatives are hidden from riders but still listed here
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sponsors: Vec<Sponsor>,

    /// UN sustainable-development goals this initiative contributes to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sdgs: Vec<Sdg>,

    #[serde(default, rename = "presignedImageURL", skip_serializing_if = "Option::is_none")]
    pub presigned_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Institution hosting an initiative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "presignedLogoURL", skip_serializing_if = "Option::is_none")]
    pub presigned_logo_url: Option<String>,
}

/// Corporate sponsor backing an initiative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "presignedLogoURL", skip_serializing_if = "Option::is_none")]
    pub presigned_logo_url: Option<String>,
}

/// Sustainable-development goal tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sdg {
    pub code: u32,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "imageURI", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}
