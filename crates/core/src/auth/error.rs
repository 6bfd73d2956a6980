//! Authentication and registration error types.

use thiserror::Error;

use super::password::PasswordError;
use crate::storage::StorageError;
use fintrack_shared::AppError;

/// Errors from the user service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user registered with the given email.
    #[error("user not found for the given email")]
    UserNotFound,

    /// The supplied password does not match the stored hash.
    #[error("invalid password")]
    InvalidPassword,

    /// A user is already registered with this email.
    #[error("a user is already registered with this email")]
    EmailTaken,

    /// Hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::UserNotFound | AuthError::InvalidPassword => {
                Self::Unauthorized(err.to_string())
            }
            AuthError::EmailTaken => Self::Conflict(err.to_string()),
            AuthError::Password(_) => Self::Internal(err.to_string()),
            AuthError::Storage(_) => Self::Database(err.to_string()),
        }
    }
}
