//! Persistence validation for ledger entries.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::{EntryDraft, EntryType};
use fintrack_shared::types::UserId;

/// Validation errors for a candidate ledger entry.
///
/// Checks run in a fixed order and stop at the first failure, so a draft
/// with several problems reports only the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryValidationError {
    /// Description is missing or blank.
    #[error("invalid description")]
    InvalidDescription,

    /// Month is missing or outside 1-12.
    #[error("invalid month")]
    InvalidMonth,

    /// Year is missing.
    #[error("invalid year")]
    InvalidYear,

    /// No owning user on the draft.
    #[error("missing user")]
    MissingUser,

    /// Amount is missing, zero, or negative.
    #[error("invalid amount")]
    InvalidAmount,

    /// No income/expense classification.
    #[error("missing entry type")]
    MissingEntryType,
}

/// The fields of a draft that survived validation, owned.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    /// Trimmed, non-empty description.
    pub description: String,
    /// Month in 1-12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Owning user.
    pub owner: UserId,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub entry_type: EntryType,
}

/// Validates a candidate entry for persistence.
///
/// Pure and deterministic: no side effects, same draft in, same answer out.
///
/// # Errors
///
/// Returns the first rule the draft violates, in declaration order.
pub fn validate(draft: &EntryDraft) -> Result<ValidEntry, EntryValidationError> {
    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(EntryValidationError::InvalidDescription)?
        .to_string();

    let month = draft
        .month
        .filter(|m| (1..=12).contains(m))
        .ok_or(EntryValidationError::InvalidMonth)?;

    let year = draft.year.ok_or(EntryValidationError::InvalidYear)?;

    let owner = draft.owner.ok_or(EntryValidationError::MissingUser)?;

    let amount = draft
        .amount
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(EntryValidationError::InvalidAmount)?;

    let entry_type = draft
        .entry_type
        .ok_or(EntryValidationError::MissingEntryType)?;

    Ok(ValidEntry {
        description,
        month,
        year,
        owner,
        amount,
        entry_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn valid_draft() -> EntryDraft {
        EntryDraft {
            description: Some("groceries".to_string()),
            month: Some(2),
            year: Some(2026),
            amount: Some(dec!(150.40)),
            entry_type: Some(EntryType::Expense),
            owner: Some(UserId::new()),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes_and_trims_description() {
        let mut draft = valid_draft();
        draft.description = Some("  groceries  ".to_string());

        let valid = validate(&draft).unwrap();
        assert_eq!(valid.description, "groceries");
        assert_eq!(valid.month, 2);
        assert_eq!(valid.year, 2026);
        assert_eq!(valid.amount, dec!(150.40));
        assert_eq!(valid.entry_type, EntryType::Expense);
    }

    /// Walks the whole rule chain, fixing one field at a time, the way a
    /// caller correcting a rejected form would.
    #[test]
    fn test_rules_fail_in_declaration_order() {
        let mut draft = valid_draft();

        draft.description = Some(String::new());
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidDescription
        );

        draft.description = Some("test description".to_string());
        draft.month = Some(0);
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidMonth
        );

        draft.month = Some(2);
        draft.year = None;
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidYear
        );

        draft.year = Some(2000);
        draft.owner = None;
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::MissingUser
        );

        draft.owner = Some(UserId::new());
        draft.amount = Some(dec!(-1));
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidAmount
        );

        draft.amount = Some(Decimal::ONE);
        draft.entry_type = None;
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::MissingEntryType
        );

        draft.entry_type = Some(EntryType::Income);
        assert!(validate(&draft).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0))]
    #[case(Some(13))]
    #[case(Some(-3))]
    fn test_rejects_out_of_range_month(#[case] month: Option<i32>) {
        let mut draft = valid_draft();
        draft.month = month;
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidMonth
        );
    }

    #[rstest]
    #[case(Some(1))]
    #[case(Some(12))]
    fn test_accepts_boundary_months(#[case] month: Option<i32>) {
        let mut draft = valid_draft();
        draft.month = month;
        assert!(validate(&draft).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(dec!(0)))]
    #[case(Some(dec!(-0.01)))]
    fn test_rejects_non_positive_amount(#[case] amount: Option<Decimal>) {
        let mut draft = valid_draft();
        draft.amount = amount;
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidAmount
        );
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut draft = valid_draft();
        draft.description = Some("   ".to_string());
        assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidDescription
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EntryValidationError::InvalidDescription.to_string(),
            "invalid description"
        );
        assert_eq!(EntryValidationError::InvalidMonth.to_string(), "invalid month");
        assert_eq!(EntryValidationError::InvalidYear.to_string(), "invalid year");
        assert_eq!(EntryValidationError::MissingUser.to_string(), "missing user");
        assert_eq!(
            EntryValidationError::InvalidAmount.to_string(),
            "invalid amount"
        );
        assert_eq!(
            EntryValidationError::MissingEntryType.to_string(),
            "missing entry type"
        );
    }
}
