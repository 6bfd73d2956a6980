//! User domain types.

use serde::{Deserialize, Serialize};

use fintrack_shared::types::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by storage.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across all users.
    pub email: String,
    /// Argon2id hash of the password, in PHC string format.
    pub password_hash: String,
}

/// Registration input. Carries the raw password; the service hashes it
/// before anything is stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Raw password, hashed during registration.
    pub password: String,
}
