//! Property-based tests for entry validation and balance aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::BalanceTotals;
use super::entry::{EntryDraft, EntryType};
use super::validation::{EntryValidationError, validate};
use fintrack_shared::types::UserId;

/// Strategy for a strictly positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a zero-or-negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy for an optional aggregate sum, as a repository would return it.
fn optional_sum() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![Just(None), positive_amount().prop_map(Some)]
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

/// Strategy for a draft that satisfies every persistence rule.
fn valid_draft() -> impl Strategy<Value = EntryDraft> {
    (
        "[a-z]{1,32}",
        1i32..=12,
        1990i32..2100,
        positive_amount(),
        entry_type_strategy(),
    )
        .prop_map(|(description, month, year, amount, entry_type)| EntryDraft {
            description: Some(description),
            month: Some(month),
            year: Some(year),
            amount: Some(amount),
            entry_type: Some(entry_type),
            owner: Some(UserId::new()),
            ..EntryDraft::default()
        })
}

proptest! {
    /// Every draft produced by the valid strategy passes validation, and the
    /// validated fields echo the draft.
    #[test]
    fn prop_valid_drafts_always_validate(draft in valid_draft()) {
        let valid = validate(&draft).unwrap();
        prop_assert_eq!(Some(valid.month), draft.month);
        prop_assert_eq!(Some(valid.year), draft.year);
        prop_assert_eq!(Some(valid.amount), draft.amount);
        prop_assert_eq!(Some(valid.entry_type), draft.entry_type);
    }

    /// A blank description wins over any other defect: the description rule
    /// runs first.
    #[test]
    fn prop_description_failure_masks_later_failures(
        draft in valid_draft(),
        bad_month in 13i32..100,
    ) {
        let mut draft = draft;
        draft.description = Some("   ".to_string());
        draft.month = Some(bad_month);
        prop_assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidDescription
        );
    }

    /// Out-of-range months are rejected no matter what the rest looks like.
    #[test]
    fn prop_month_out_of_range_rejected(
        draft in valid_draft(),
        bad_month in prop_oneof![(-100i32..=0), (13i32..100)],
    ) {
        let mut draft = draft;
        draft.month = Some(bad_month);
        prop_assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidMonth
        );
    }

    /// Zero and negative amounts are rejected once earlier rules pass.
    #[test]
    fn prop_non_positive_amount_rejected(
        draft in valid_draft(),
        amount in non_positive_amount(),
    ) {
        let mut draft = draft;
        draft.amount = Some(amount);
        prop_assert_eq!(
            validate(&draft).unwrap_err(),
            EntryValidationError::InvalidAmount
        );
    }

    /// Validation is deterministic: the same draft always yields the same
    /// verdict.
    #[test]
    fn prop_validation_is_deterministic(draft in valid_draft()) {
        prop_assert_eq!(validate(&draft), validate(&draft));
    }

    /// Net balance is income minus expense, with absent sums as zero.
    #[test]
    fn prop_net_balance_is_income_minus_expense(
        income in optional_sum(),
        expense in optional_sum(),
    ) {
        let totals = BalanceTotals::from_sums(income, expense);
        let expected = income.unwrap_or(Decimal::ZERO) - expense.unwrap_or(Decimal::ZERO);
        prop_assert_eq!(totals.net(), expected);
    }
}
