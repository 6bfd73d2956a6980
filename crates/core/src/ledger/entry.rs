//! Ledger entry domain types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fintrack_shared::types::{EntryId, UserId};

/// Classification of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// Lifecycle state of a ledger entry.
///
/// Only settled entries count toward a user's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Recorded but not yet effective.
    Pending,
    /// Effective; included in the balance.
    Settled,
    /// Withdrawn; never included in the balance.
    Cancelled,
}

/// Error for an unrecognized entry type string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid entry type: {0:?}")]
pub struct ParseEntryTypeError(pub String);

/// Error for an unrecognized entry status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid entry status: {0:?}")]
pub struct ParseEntryStatusError(pub String);

impl FromStr for EntryType {
    type Err = ParseEntryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ParseEntryTypeError(other.to_string())),
        }
    }
}

impl FromStr for EntryStatus {
    type Err = ParseEntryStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "settled" => Ok(Self::Settled),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseEntryStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Settled => write!(f, "settled"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier, assigned by storage.
    pub id: EntryId,
    /// What the money was for.
    pub description: String,
    /// Calendar month, 1-12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Amount, strictly positive.
    pub amount: Decimal,
    /// Income or expense.
    pub entry_type: EntryType,
    /// Lifecycle state.
    pub status: EntryStatus,
    /// The user this entry belongs to.
    pub owner: UserId,
    /// Date the entry was recorded.
    pub registered_on: NaiveDate,
}

/// A candidate entry as received from the outside, before validation.
///
/// Every field is optional; the validator decides whether the draft can be
/// persisted. A missing `id` means the entry has never been saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    /// Identifier of an already-persisted entry, if any.
    pub id: Option<EntryId>,
    /// What the money was for.
    pub description: Option<String>,
    /// Calendar month, expected 1-12.
    pub month: Option<i32>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Amount, expected strictly positive.
    pub amount: Option<Decimal>,
    /// Income or expense.
    pub entry_type: Option<EntryType>,
    /// Lifecycle state; defaults to pending at creation.
    pub status: Option<EntryStatus>,
    /// The user this entry belongs to.
    pub owner: Option<UserId>,
    /// Date the entry was recorded.
    pub registered_on: Option<NaiveDate>,
}

impl From<LedgerEntry> for EntryDraft {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: Some(entry.id),
            description: Some(entry.description),
            month: Some(entry.month),
            year: Some(entry.year),
            amount: Some(entry.amount),
            entry_type: Some(entry.entry_type),
            status: Some(entry.status),
            owner: Some(entry.owner),
            registered_on: Some(entry.registered_on),
        }
    }
}

/// A validated entry ready for its first save. No identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// What the money was for.
    pub description: String,
    /// Calendar month, 1-12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Amount, strictly positive.
    pub amount: Decimal,
    /// Income or expense.
    pub entry_type: EntryType,
    /// Lifecycle state.
    pub status: EntryStatus,
    /// The user this entry belongs to.
    pub owner: UserId,
    /// Date the entry was recorded.
    pub registered_on: NaiveDate,
}
