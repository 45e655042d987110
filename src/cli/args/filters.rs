//! Resource filter argument types

use clap::Args;

use crate::client::models::{ContentState, ContentType};
use crate::client::pagination::{ContentFilterParams, InitiativeFilterParams};

/// Content type choices for `content list`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ContentTypeArg {
    Event,
    News,
}

impl ContentTypeArg {
    pub fn to_model(self) -> ContentType {
        match self {
            ContentTypeArg::Event => ContentType::Event,
            ContentTypeArg::News => ContentType::News,
        }
    }
}

/// Moderation state choices for `content list`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ContentStateArg {
    Pending,
    Approved,
    Rejected,
}

impl ContentStateArg {
    pub fn to_model(self) -> ContentState {
        match self {
            ContentStateArg::Pending => ContentState::Pending,
            ContentStateArg::Approved => ContentState::Approved,
            ContentStateArg::Rejected => ContentState::Rejected,
        }
    }
}

/// Filters for the content listing. The API serves one content type per
/// request, so `--type` is mandatory.
#[derive(Args, Debug, Clone)]
pub struct ContentFilterArgs {
    /// Content type to list (event, news)
    #[arg(long = "type", short = 't', value_enum)]
    pub content_type: ContentTypeArg,

    /// Narrow to one moderation state (pending, approved, rejected)
    #[arg(long, value_enum)]
    pub state: Option<ContentStateArg>,
}

impl ContentFilterArgs {
    pub fn to_params(&self) -> ContentFilterParams {
        let mut params = ContentFilterParams::new(self.content_type.to_model());
        if let Some(state) = self.state {
            params = params.state(state.to_model());
        }
        params
    }
}

/// Filters for the initiative listing.
#[derive(Args, Debug, Default, Clone)]
pub struct InitiativeFilterArgs {
    /// Hide initiatives that are disabled for riders
    #[arg(long)]
    pub enabled_only: bool,
}

impl InitiativeFilterArgs {
    pub fn to_params(&self) -> InitiativeFilterParams {
        let params = InitiativeFilterParams::new();
        if self.enabled_only {
            params.enabled_only()
        } else {
            params
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_filter_args_to_params() {
        let args = ContentFilterArgs {
            content_type: ContentTypeArg::News,
            state: Some(ContentStateArg::Pending),
        };

        let params = args.to_params();
        let query = params.to_query_params();
        assert!(query.contains(&("type", "news".to_string())));
        assert!(query.contains(&("state", "pending".to_string())));
    }

    #[test]
    fn test_initiative_filter_args_default_includes_disabled() {
        let params = InitiativeFilterArgs::default().to_params();
        assert!(params.include_disabled);

        let params = InitiativeFilterArgs { enabled_only: true }.to_params();
        assert!(!params.include_disabled);
    }
}
