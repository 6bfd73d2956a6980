//! Balance aggregation for a single user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settled totals for one user.
///
/// Pending and cancelled entries never reach this type; the repository
/// aggregates only settled rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTotals {
    /// Sum of settled income amounts.
    pub income: Decimal,
    /// Sum of settled expense amounts.
    pub expense: Decimal,
}

impl BalanceTotals {
    /// Builds totals from raw aggregate sums.
    ///
    /// An absent sum means no matching rows and counts as zero.
    #[must_use]
    pub fn from_sums(income: Option<Decimal>, expense: Option<Decimal>) -> Self {
        Self {
            income: income.unwrap_or(Decimal::ZERO),
            expense: expense.unwrap_or(Decimal::ZERO),
        }
    }

    /// Net balance: income minus expense.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_subtracts_expense_from_income() {
        let totals = BalanceTotals::from_sums(Some(dec!(100)), Some(dec!(50)));
        assert_eq!(totals.net(), dec!(50));
    }

    #[test]
    fn test_missing_income_counts_as_zero() {
        let totals = BalanceTotals::from_sums(None, Some(dec!(50)));
        assert_eq!(totals.income, Decimal::ZERO);
        assert_eq!(totals.net(), dec!(-50));
    }

    #[test]
    fn test_missing_expense_counts_as_zero() {
        let totals = BalanceTotals::from_sums(Some(dec!(70.25)), None);
        assert_eq!(totals.net(), dec!(70.25));
    }

    #[test]
    fn test_no_rows_at_all_is_zero_balance() {
        let totals = BalanceTotals::from_sums(None, None);
        assert_eq!(totals.net(), Decimal::ZERO);
    }
}
