//! Read-side port over the user collection.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::DirectoryQueryError;

/// Port for reading users.
///
/// Implementations return users in storage order and never filter the list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Every user, in storage order.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryQueryError>;

    /// First user whose id equals `id`, or `None` when nothing matches.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, DirectoryQueryError>;
}
