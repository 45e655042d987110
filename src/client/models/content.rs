//! External editorial content wire models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of an external content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Event,
    News,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Event => "event",
            ContentType::News => "news",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of an external content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    Pending,
    Approved,
    Rejected,
}

impl ContentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentState::Pending => "pending",
            ContentState::Approved => "approved",
            ContentState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ContentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scraped editorial entry (news article or community event) awaiting
/// moderation. Different content types omit different fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    pub state: ContentState,

    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub description: String,

    /// Source link; only `news` entries carry this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_url: Option<String>,

    /// Event day; only `event` entries carry this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Event start time; only `event` entries carry this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Content language descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub native_name: String,
}
