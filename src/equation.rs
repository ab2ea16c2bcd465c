//! The equation evaluator: Assets = Liabilities + Equity.
//!
//! A pure function of the ledger. It is a checker, not an enforcer: the
//! validator's equality-only commit policy means a ledger built from the
//! bundled catalog always balances, but `evaluate` reports honestly for any
//! vector it is handed.

use crate::account::AccountVector;
use crate::money::format_money;

/// Derived totals for one ledger snapshot. Never stored; always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationSummary {
    pub assets: i64,
    pub liabilities: i64,
    pub equity: i64,
    pub balanced: bool,
}

/// Compute assets, liabilities, equity, and the balance check for a ledger.
pub fn evaluate(ledger: &AccountVector) -> EquationSummary {
    let assets = ledger.cash + ledger.supplies + ledger.equipment + ledger.ar;
    let liabilities = ledger.ap + ledger.notes;
    let equity = ledger.capital + ledger.revenue - ledger.expense - ledger.withdrawals;

    EquationSummary {
        assets,
        liabilities,
        equity,
        balanced: assets == liabilities + equity,
    }
}

impl std::fmt::Display for EquationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} + {} [{}]",
            format_money(self.assets),
            format_money(self.liabilities),
            format_money(self.equity),
            if self.balanced { "balanced" } else { "NOT balanced" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    #[test]
    fn zero_ledger_is_balanced() {
        let summary = evaluate(&AccountVector::ZERO);
        assert_eq!(summary.assets, 0);
        assert_eq!(summary.liabilities, 0);
        assert_eq!(summary.equity, 0);
        assert!(summary.balanced);
    }

    #[test]
    fn investment_balances() {
        let mut ledger = AccountVector::ZERO;
        ledger.set(Account::Cash, 30_000);
        ledger.set(Account::OwnerCapital, 30_000);

        let summary = evaluate(&ledger);
        assert_eq!(summary.assets, 30_000);
        assert_eq!(summary.liabilities, 0);
        assert_eq!(summary.equity, 30_000);
        assert!(summary.balanced);
    }

    #[test]
    fn expenses_and_withdrawals_reduce_equity() {
        let mut ledger = AccountVector::ZERO;
        ledger.set(Account::OwnerCapital, 10_000);
        ledger.set(Account::Revenue, 4_200);
        ledger.set(Account::Expense, 1_700);
        ledger.set(Account::Withdrawals, 200);

        let summary = evaluate(&ledger);
        assert_eq!(summary.equity, 10_000 + 4_200 - 1_700 - 200);
    }

    #[test]
    fn unbalanced_ledger_is_reported_as_such() {
        let mut ledger = AccountVector::ZERO;
        ledger.set(Account::Cash, 1_000);

        let summary = evaluate(&ledger);
        assert!(!summary.balanced);
    }

    #[test]
    fn display_shows_equation_and_verdict() {
        let mut ledger = AccountVector::ZERO;
        ledger.set(Account::Cash, 30_000);
        ledger.set(Account::OwnerCapital, 30_000);

        let rendered = format!("{}", evaluate(&ledger));
        assert!(rendered.contains("$30,000"));
        assert!(rendered.contains("balanced"));
    }
}
