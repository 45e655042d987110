//! External content display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, truncate_string};
use crate::client::models::ContentEntry;

/// Content row for `content list` and moderation output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContentDisplay {
    /// Content ID
    #[tabled(rename = "CONTENT ID")]
    pub id: String,

    /// Entry title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// event or news
    #[tabled(rename = "TYPE")]
    pub content_type: String,

    /// Moderation state
    #[tabled(rename = "STATE")]
    pub state: String,

    /// Content language code
    #[tabled(rename = "LANG")]
    pub language: String,

    /// Scrape date
    #[tabled(rename = "ADDED")]
    pub added: String,
}

impl From<ContentEntry> for ContentDisplay {
    fn from(entry: ContentEntry) -> Self {
        let language = entry
            .language
            .as_ref()
            .map(|l| l.code.clone())
            .or(entry.language_code.clone())
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: entry.id,
            title: truncate_string(&entry.title, 48),
            content_type: entry.content_type.to_string(),
            state: entry.state.to_string(),
            language,
            added: format_date(entry.created_at),
        }
    }
}
