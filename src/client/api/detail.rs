//! Detail API trait for single-record reads

use async_trait::async_trait;

use crate::client::models::{Initiative, Metrics, User, UserPicture};
use crate::error::Result;

/// Single-record and aggregate reads
#[async_trait]
pub trait DetailApi: Send + Sync {
    /// Fetch one rider account
    async fn get_user(&self, user_id: &str) -> Result<User>;

    /// Fetch the presigned profile-picture URL for a rider
    async fn get_user_picture(&self, user_id: &str) -> Result<UserPicture>;

    /// Fetch one initiative
    async fn get_initiative(&self, initiative_id: &str) -> Result<Initiative>;

    /// Fetch the aggregate analytics snapshot
    async fn get_metrics(&self) -> Result<Metrics>;
}
