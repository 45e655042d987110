//! Wire models for the platform API

pub mod auth;
pub mod content;
pub mod initiative;
pub mod metrics;
pub mod user;

pub use auth::{Credential, TokenErrorResponse, TokenResponse};
pub use content::{ContentEntry, ContentState, ContentType, Language};
pub use initiative::{Initiative, Institution, Sdg, Sponsor};
pub use metrics::{AgeGroups, GenderCount, Metrics, PlatformMetrics, TripMetrics, UserMetrics};
pub use user::{User, UserPicture};
