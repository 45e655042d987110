//! Initiative display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{truncate_string, yes_no};
use crate::client::models::Initiative;

/// Initiative row for `initiative list` and `initiative get` output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InitiativeDisplay {
    /// Initiative ID
    #[tabled(rename = "INITIATIVE ID")]
    pub id: String,

    /// Title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Hosting institution
    #[tabled(rename = "INSTITUTION")]
    pub institution: String,

    /// Credits accumulated vs goal
    #[tabled(rename = "PROGRESS")]
    pub progress: String,

    /// Visible to riders
    #[tabled(rename = "ENABLED")]
    pub enabled: String,

    /// Last day of the campaign
    #[tabled(rename = "END DATE")]
    pub end_date: String,
}

impl From<Initiative> for InitiativeDisplay {
    fn from(initiative: Initiative) -> Self {
        let institution = initiative
            .institution
            .as_ref()
            .map(|i| i.name.clone())
            .or(initiative.institution_id.clone())
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: initiative.id,
            title: truncate_string(&initiative.title, 40),
            institution,
            progress: format!("{:.0}/{:.0}", initiative.credits, initiative.goal),
            enabled: yes_no(initiative.enabled),
            end_date: initiative.end_date.unwrap_or_else(|| "--".to_string()),
        }
    }
}
