//! Active enums backing the Postgres `entry_type` and `entry_status` types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income/expense classification, stored as the Postgres `entry_type` enum.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_type")]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Entry lifecycle state, stored as the Postgres `entry_status` enum.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_status")]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Recorded but not yet effective.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Effective; included in the balance.
    #[sea_orm(string_value = "settled")]
    Settled,
    /// Withdrawn; never included in the balance.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<fintrack_core::ledger::EntryType> for EntryType {
    fn from(value: fintrack_core::ledger::EntryType) -> Self {
        match value {
            fintrack_core::ledger::EntryType::Income => Self::Income,
            fintrack_core::ledger::EntryType::Expense => Self::Expense,
        }
    }
}

impl From<EntryType> for fintrack_core::ledger::EntryType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Income => Self::Income,
            EntryType::Expense => Self::Expense,
        }
    }
}

impl From<fintrack_core::ledger::EntryStatus> for EntryStatus {
    fn from(value: fintrack_core::ledger::EntryStatus) -> Self {
        match value {
            fintrack_core::ledger::EntryStatus::Pending => Self::Pending,
            fintrack_core::ledger::EntryStatus::Settled => Self::Settled,
            fintrack_core::ledger::EntryStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<EntryStatus> for fintrack_core::ledger::EntryStatus {
    fn from(value: EntryStatus) -> Self {
        match value {
            EntryStatus::Pending => Self::Pending,
            EntryStatus::Settled => Self::Settled,
            EntryStatus::Cancelled => Self::Cancelled,
        }
    }
}
