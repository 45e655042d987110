//! Moderation API trait for state-changing operations

use async_trait::async_trait;

use crate::client::models::{ContentEntry, User};
use crate::error::Result;

/// Staff moderation actions. Each returns the record as the server sees it
/// after the change.
#[async_trait]
pub trait ModerationApi: Send + Sync {
    /// Mark a rider account as verified
    async fn verify_user(&self, user_id: &str) -> Result<User>;

    /// Permanently delete a rider account
    async fn delete_user(&self, user_id: &str) -> Result<User>;

    /// Approve an external content entry for publication
    async fn approve_content(&self, content_id: &str) -> Result<ContentEntry>;

    /// Reject an external content entry
    async fn reject_content(&self, content_id: &str) -> Result<ContentEntry>;
}
