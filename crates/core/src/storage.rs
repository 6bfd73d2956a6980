//! Error contract for storage collaborators.

use thiserror::Error;

/// Opaque failure reported by a repository implementation.
///
/// The core never inspects storage failures; it only carries them up to the
/// caller, which maps them to an internal-error response.
#[derive(Debug, Clone, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

impl StorageError {
    /// Wraps a storage-layer failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
