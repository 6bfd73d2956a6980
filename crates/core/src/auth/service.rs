//! User service: registration and credential checks.

use super::error::AuthError;
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;
use super::user::{NewUser, User};
use fintrack_shared::types::UserId;

/// User service backed by an injected repository.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service backed by the given repository.
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Checks credentials and returns the matching user.
    ///
    /// # Errors
    ///
    /// `AuthError::UserNotFound` when no user carries the email,
    /// `AuthError::InvalidPassword` when the hash comparison fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidPassword);
        }

        Ok(user)
    }

    /// Registers a new user.
    ///
    /// Email uniqueness is checked first; the raw password is hashed with
    /// Argon2id before the repository sees anything.
    ///
    /// # Errors
    ///
    /// `AuthError::EmailTaken` when the email is already registered.
    pub async fn register(&self, new_user: NewUser) -> Result<User, AuthError> {
        self.validate_email_uniqueness(&new_user.email).await?;

        let password_hash = hash_password(&new_user.password)?;
        Ok(self
            .repo
            .insert(&new_user.name, &new_user.email, &password_hash)
            .await?)
    }

    /// Fails when the email is already registered.
    ///
    /// # Errors
    ///
    /// `AuthError::EmailTaken` when a user with the email exists.
    pub async fn validate_email_uniqueness(&self, email: &str) -> Result<(), AuthError> {
        if self.repo.email_exists(email).await? {
            return Err(AuthError::EmailTaken);
        }
        Ok(())
    }

    /// Looks a user up by identifier.
    ///
    /// # Errors
    ///
    /// `AuthError::Storage` when the query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
