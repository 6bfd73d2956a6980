//! Storage contract consumed by the ledger service.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::entry::{EntryStatus, EntryType, LedgerEntry, NewEntry};
use crate::storage::StorageError;
use fintrack_shared::types::{EntryId, UserId};

/// Exact-match filter over a user's entries.
///
/// Only fields that are `Some` take part in the query; the owner always does.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFilter {
    /// The user whose entries are searched.
    pub owner: UserId,
    /// Exact description match.
    pub description: Option<String>,
    /// Exact month match.
    pub month: Option<i32>,
    /// Exact year match.
    pub year: Option<i32>,
}

impl EntryFilter {
    /// A filter matching every entry of one user.
    #[must_use]
    pub const fn for_user(owner: UserId) -> Self {
        Self {
            owner,
            description: None,
            month: None,
            year: None,
        }
    }
}

/// Persistence operations the ledger service depends on.
///
/// Implementations live outside the core; the service never sees the
/// database. Failures come back as opaque [`StorageError`]s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Persists a new entry and returns it with its assigned identifier.
    async fn insert(&self, entry: NewEntry) -> Result<LedgerEntry, StorageError>;

    /// Replaces the stored row for an already-persisted entry.
    async fn update(&self, entry: &LedgerEntry) -> Result<LedgerEntry, StorageError>;

    /// Removes an entry.
    async fn delete(&self, id: EntryId) -> Result<(), StorageError>;

    /// Looks an entry up by identifier.
    async fn find_by_id(&self, id: EntryId) -> Result<Option<LedgerEntry>, StorageError>;

    /// Returns all entries matching the filter, in storage order.
    ///
    /// The order is unspecified but stable within a single query.
    async fn find_by_filter(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<LedgerEntry>, StorageError>;

    /// Sum of amounts for one user, type, and status.
    ///
    /// `None` when no rows match; callers decide what absence means.
    async fn sum_by_type_and_status(
        &self,
        owner: UserId,
        entry_type: EntryType,
        status: EntryStatus,
    ) -> Result<Option<Decimal>, StorageError>;
}
