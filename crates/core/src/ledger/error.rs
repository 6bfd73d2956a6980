//! Ledger error types.

use thiserror::Error;

use super::entry::{ParseEntryStatusError, ParseEntryTypeError};
use super::validation::EntryValidationError;
use crate::storage::StorageError;
use fintrack_shared::AppError;
use fintrack_shared::types::{EntryId, UserId};

/// Errors that can occur during ledger operations.
///
/// Everything here is recoverable and caller-facing. Calling `update` or
/// `delete` on a never-persisted draft is a caller bug and panics instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The draft failed a persistence rule.
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    /// The referenced owner does not exist.
    #[error("no user found for id {0}")]
    OwnerNotFound(UserId),

    /// An entry type string could not be parsed.
    #[error(transparent)]
    InvalidEntryType(#[from] ParseEntryTypeError),

    /// An entry status string could not be parsed.
    #[error(transparent)]
    InvalidStatus(#[from] ParseEntryStatusError),

    /// No entry with the given identifier.
    #[error("ledger entry not found: {0}")]
    EntryNotFound(EntryId),

    /// The storage collaborator failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match &err {
            LedgerError::Validation(_) => Self::Validation(err.to_string()),
            LedgerError::OwnerNotFound(_)
            | LedgerError::InvalidEntryType(_)
            | LedgerError::InvalidStatus(_) => Self::BusinessRule(err.to_string()),
            LedgerError::EntryNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::Storage(_) => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let app: AppError = LedgerError::Validation(EntryValidationError::InvalidMonth).into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.to_string(), "Validation error: invalid month");
    }

    #[test]
    fn test_owner_not_found_is_a_business_rule() {
        let app: AppError = LedgerError::OwnerNotFound(UserId::new()).into();
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.error_code(), "BUSINESS_RULE_VIOLATION");
    }

    #[test]
    fn test_unknown_status_string_is_a_business_rule() {
        let err: LedgerError = "done".parse::<super::super::EntryStatus>().unwrap_err().into();
        let app: AppError = err.into();
        assert_eq!(app.status_code(), 422);
    }

    #[test]
    fn test_missing_entry_maps_to_404() {
        let app: AppError = LedgerError::EntryNotFound(EntryId::new()).into();
        assert_eq!(app.status_code(), 404);
    }

    #[test]
    fn test_storage_failure_maps_to_500() {
        let app: AppError = LedgerError::Storage(StorageError::new("connection reset")).into();
        assert_eq!(app.status_code(), 500);
    }
}
