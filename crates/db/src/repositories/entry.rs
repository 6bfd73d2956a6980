//! Ledger entry repository for database operations.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{ledger_entries, sea_orm_active_enums};
use fintrack_core::ledger::{
    EntryFilter, EntryRepository as EntryStore, EntryStatus, EntryType, LedgerEntry, NewEntry,
};
use fintrack_core::storage::StorageError;
use fintrack_shared::types::{EntryId, UserId};

/// Ledger entry repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: DatabaseConnection,
}

impl EntryRepository {
    /// Creates a new entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: ledger_entries::Model) -> LedgerEntry {
    LedgerEntry {
        id: EntryId::from_uuid(model.id),
        description: model.description,
        month: model.month,
        year: model.year,
        amount: model.amount,
        entry_type: model.entry_type.into(),
        status: model.status.into(),
        owner: UserId::from_uuid(model.user_id),
        registered_on: model.registered_on,
    }
}

fn storage_err(err: sea_orm::DbErr) -> StorageError {
    StorageError::new(err.to_string())
}

/// Translates the optional-field filter into a query predicate.
///
/// Only fields that are `Some` contribute a condition; the owner always does.
fn filter_conditions(filter: &EntryFilter) -> Condition {
    let mut condition = Condition::all()
        .add(ledger_entries::Column::UserId.eq(filter.owner.into_inner()));

    if let Some(description) = &filter.description {
        condition = condition.add(ledger_entries::Column::Description.eq(description.clone()));
    }
    if let Some(month) = filter.month {
        condition = condition.add(ledger_entries::Column::Month.eq(month));
    }
    if let Some(year) = filter.year {
        condition = condition.add(ledger_entries::Column::Year.eq(year));
    }

    condition
}

#[async_trait]
impl EntryStore for EntryRepository {
    async fn insert(&self, entry: NewEntry) -> Result<LedgerEntry, StorageError> {
        let model = ledger_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            description: Set(entry.description),
            month: Set(entry.month),
            year: Set(entry.year),
            amount: Set(entry.amount),
            entry_type: Set(entry.entry_type.into()),
            status: Set(entry.status.into()),
            user_id: Set(entry.owner.into_inner()),
            registered_on: Set(entry.registered_on),
        };

        model
            .insert(&self.db)
            .await
            .map(to_domain)
            .map_err(storage_err)
    }

    async fn update(&self, entry: &LedgerEntry) -> Result<LedgerEntry, StorageError> {
        let model = ledger_entries::ActiveModel {
            id: Set(entry.id.into_inner()),
            description: Set(entry.description.clone()),
            month: Set(entry.month),
            year: Set(entry.year),
            amount: Set(entry.amount),
            entry_type: Set(entry.entry_type.into()),
            status: Set(entry.status.into()),
            user_id: Set(entry.owner.into_inner()),
            registered_on: Set(entry.registered_on),
        };

        model
            .update(&self.db)
            .await
            .map(to_domain)
            .map_err(storage_err)
    }

    async fn delete(&self, id: EntryId) -> Result<(), StorageError> {
        ledger_entries::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map(|_| ())
            .map_err(storage_err)
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<LedgerEntry>, StorageError> {
        ledger_entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|entry| entry.map(to_domain))
            .map_err(storage_err)
    }

    async fn find_by_filter(
        &self,
        filter: &EntryFilter,
    ) -> Result<Vec<LedgerEntry>, StorageError> {
        ledger_entries::Entity::find()
            .filter(filter_conditions(filter))
            .all(&self.db)
            .await
            .map(|entries| entries.into_iter().map(to_domain).collect())
            .map_err(storage_err)
    }

    async fn sum_by_type_and_status(
        &self,
        owner: UserId,
        entry_type: EntryType,
        status: EntryStatus,
    ) -> Result<Option<Decimal>, StorageError> {
        ledger_entries::Entity::find()
            .select_only()
            .column_as(ledger_entries::Column::Amount.sum(), "total")
            .filter(ledger_entries::Column::UserId.eq(owner.into_inner()))
            .filter(
                ledger_entries::Column::EntryType
                    .eq(sea_orm_active_enums::EntryType::from(entry_type)),
            )
            .filter(
                ledger_entries::Column::Status.eq(sea_orm_active_enums::EntryStatus::from(status)),
            )
            .into_tuple::<Option<Decimal>>()
            .one(&self.db)
            .await
            .map(Option::flatten)
            .map_err(storage_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn query_for(filter: &EntryFilter) -> String {
        ledger_entries::Entity::find()
            .filter(filter_conditions(filter))
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_owner_only_filter_has_no_other_predicates() {
        let filter = EntryFilter::for_user(UserId::new());
        let sql = query_for(&filter);

        assert!(sql.contains(r#""user_id" ="#));
        assert!(!sql.contains(r#""description" ="#));
        assert!(!sql.contains(r#""month" ="#));
        assert!(!sql.contains(r#""year" ="#));
    }

    #[test]
    fn test_filter_includes_exactly_the_set_fields() {
        let mut filter = EntryFilter::for_user(UserId::new());
        filter.month = Some(5);
        filter.year = Some(2026);
        let sql = query_for(&filter);

        assert!(sql.contains(r#""month" = 5"#));
        assert!(sql.contains(r#""year" = 2026"#));
        assert!(!sql.contains(r#""description" ="#));
    }

    #[test]
    fn test_description_filter_matches_exactly() {
        let mut filter = EntryFilter::for_user(UserId::new());
        filter.description = Some("groceries".to_string());
        let sql = query_for(&filter);

        assert!(sql.contains(r#""description" = 'groceries'"#));
        assert!(!sql.contains("LIKE"));
    }
}
