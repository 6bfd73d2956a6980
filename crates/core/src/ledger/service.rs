//! Lifecycle service for ledger entries.
//!
//! Every create/update/delete goes through here so the validation gate can
//! never be bypassed. Storage is reached only through the injected
//! [`EntryRepository`].

use chrono::Utc;
use rust_decimal::Decimal;

use super::balance::BalanceTotals;
use super::entry::{EntryDraft, EntryStatus, EntryType, LedgerEntry, NewEntry};
use super::error::LedgerError;
use super::repository::{EntryFilter, EntryRepository};
use super::validation::validate;
use fintrack_shared::types::{EntryId, UserId};

/// Lifecycle service for ledger entries.
pub struct EntryService<R> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service backed by the given repository.
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new entry.
    ///
    /// Status defaults to pending when the draft carries none, and the
    /// registration date is stamped here. On a validation failure storage is
    /// never touched.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` when the draft breaks a rule, or
    /// `LedgerError::Storage` when the save fails.
    pub async fn create(&self, draft: EntryDraft) -> Result<LedgerEntry, LedgerError> {
        let valid = validate(&draft)?;
        let entry = NewEntry {
            description: valid.description,
            month: valid.month,
            year: valid.year,
            amount: valid.amount,
            entry_type: valid.entry_type,
            status: draft.status.unwrap_or(EntryStatus::Pending),
            owner: valid.owner,
            registered_on: Utc::now().date_naive(),
        };
        Ok(self.repo.insert(entry).await?)
    }

    /// Re-validates and replaces an already-persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` or `LedgerError::Storage`.
    ///
    /// # Panics
    ///
    /// Panics when the draft has no identifier: updating an entry that was
    /// never saved is a caller bug, not a recoverable input error.
    pub async fn update(&self, draft: EntryDraft) -> Result<LedgerEntry, LedgerError> {
        let id = draft
            .id
            .expect("cannot update a ledger entry that was never persisted");
        let valid = validate(&draft)?;
        let entry = LedgerEntry {
            id,
            description: valid.description,
            month: valid.month,
            year: valid.year,
            amount: valid.amount,
            entry_type: valid.entry_type,
            status: draft.status.unwrap_or(EntryStatus::Pending),
            owner: valid.owner,
            registered_on: draft
                .registered_on
                .unwrap_or_else(|| Utc::now().date_naive()),
        };
        Ok(self.repo.update(&entry).await?)
    }

    /// Removes a persisted entry. Deletion is structural, so the draft's
    /// content is not re-validated.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when the delete fails.
    ///
    /// # Panics
    ///
    /// Panics when the draft has no identifier, under the same contract as
    /// [`EntryService::update`].
    pub async fn delete(&self, draft: &EntryDraft) -> Result<(), LedgerError> {
        let id = draft
            .id
            .expect("cannot delete a ledger entry that was never persisted");
        Ok(self.repo.delete(id).await?)
    }

    /// Moves a persisted entry to a new status.
    ///
    /// Goes through [`EntryService::update`], so the entry is re-validated
    /// even though only the status changed.
    ///
    /// # Errors
    ///
    /// Same as [`EntryService::update`].
    pub async fn update_status(
        &self,
        entry: LedgerEntry,
        status: EntryStatus,
    ) -> Result<LedgerEntry, LedgerError> {
        let mut draft = EntryDraft::from(entry);
        draft.status = Some(status);
        self.update(draft).await
    }

    /// Returns all entries matching the filter, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when the query fails.
    pub async fn search(&self, filter: &EntryFilter) -> Result<Vec<LedgerEntry>, LedgerError> {
        Ok(self.repo.find_by_filter(filter).await?)
    }

    /// Looks an entry up by identifier.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when the query fails.
    pub async fn find_by_id(&self, id: EntryId) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Net balance for a user: settled income minus settled expense.
    ///
    /// Pending and cancelled entries are excluded entirely, and a sum with
    /// no matching rows counts as zero.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when an aggregate query fails.
    pub async fn balance_for_user(&self, owner: UserId) -> Result<Decimal, LedgerError> {
        let income = self
            .repo
            .sum_by_type_and_status(owner, EntryType::Income, EntryStatus::Settled)
            .await?;
        let expense = self
            .repo
            .sum_by_type_and_status(owner, EntryType::Expense, EntryStatus::Settled)
            .await?;
        Ok(BalanceTotals::from_sums(income, expense).net())
    }
}
