//! Storage contract consumed by the user service.

use async_trait::async_trait;

use super::user::User;
use crate::storage::StorageError;
use fintrack_shared::types::UserId;

/// Persistence operations the user service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns it with its assigned identifier.
    ///
    /// `password_hash` is the already-hashed credential; raw passwords never
    /// reach the repository.
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StorageError>;

    /// Looks a user up by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Looks a user up by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Whether any user is registered with the given email.
    async fn email_exists(&self, email: &str) -> Result<bool, StorageError>;
}
