//! Ledger domain logic.
//!
//! This module implements the entry lifecycle:
//! - Domain types for entries, drafts, and statuses
//! - Persistence validation rules
//! - The lifecycle service (create/update/delete/status/search)
//! - Balance aggregation
//! - The repository contract storage implementations fulfill
//! - Error types for ledger operations

pub mod balance;
pub mod entry;
pub mod error;
pub mod repository;
pub mod service;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::BalanceTotals;
pub use entry::{
    EntryDraft, EntryStatus, EntryType, LedgerEntry, NewEntry, ParseEntryStatusError,
    ParseEntryTypeError,
};
pub use error::LedgerError;
pub use repository::{EntryFilter, EntryRepository};
pub use service::EntryService;
pub use validation::{EntryValidationError, ValidEntry, validate};
