//! The ten named accounts and the `AccountVector` they span.
//!
//! Every quantity in the lab (the running ledger, a transaction's expected
//! delta, a learner's entered delta) is an [`AccountVector`]: one signed,
//! clamped amount per account. The vector is a plain value type; folding a
//! delta into a ledger produces a new vector and leaves the old one intact.

use serde::{Deserialize, Serialize};

use crate::money::clamp_money;

/// One of the ten accounts tracked by the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Account {
    Cash,
    Supplies,
    Equipment,
    AccountsReceivable,
    AccountsPayable,
    NotesPayable,
    OwnerCapital,
    Withdrawals,
    Revenue,
    Expense,
}

/// Which side of the equation an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Asset,
    Liability,
    Equity,
}

impl Account {
    /// All accounts in canonical order. Mismatch reports, entry forms, and
    /// serialized keys all follow this order.
    pub const ALL: [Account; 10] = [
        Account::Cash,
        Account::Supplies,
        Account::Equipment,
        Account::AccountsReceivable,
        Account::AccountsPayable,
        Account::NotesPayable,
        Account::OwnerCapital,
        Account::Withdrawals,
        Account::Revenue,
        Account::Expense,
    ];

    /// Stable short key used in catalog TOML and JSON exports.
    pub fn key(self) -> &'static str {
        match self {
            Account::Cash => "cash",
            Account::Supplies => "supplies",
            Account::Equipment => "equipment",
            Account::AccountsReceivable => "ar",
            Account::AccountsPayable => "ap",
            Account::NotesPayable => "notes",
            Account::OwnerCapital => "capital",
            Account::Withdrawals => "withdrawals",
            Account::Revenue => "revenue",
            Account::Expense => "expense",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Account::Cash => "Cash",
            Account::Supplies => "Supplies",
            Account::Equipment => "Equipment",
            Account::AccountsReceivable => "Accounts Receivable",
            Account::AccountsPayable => "Accounts Payable",
            Account::NotesPayable => "Notes Payable",
            Account::OwnerCapital => "Owner Capital",
            Account::Withdrawals => "Withdrawals",
            Account::Revenue => "Revenues",
            Account::Expense => "Expenses",
        }
    }

    /// Which section of the equation this account contributes to.
    pub fn classification(self) -> Classification {
        match self {
            Account::Cash
            | Account::Supplies
            | Account::Equipment
            | Account::AccountsReceivable => Classification::Asset,
            Account::AccountsPayable | Account::NotesPayable => Classification::Liability,
            Account::OwnerCapital
            | Account::Withdrawals
            | Account::Revenue
            | Account::Expense => Classification::Equity,
        }
    }

    /// Look up an account by its short key.
    pub fn from_key(key: &str) -> Option<Account> {
        Account::ALL.into_iter().find(|a| a.key() == key)
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A signed amount per account: a running ledger, an expected delta, or a
/// normalized entered delta, depending on context.
///
/// Accounts omitted from a serialized form default to 0, so catalog authors
/// only list the accounts a transaction touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountVector {
    pub cash: i64,
    pub supplies: i64,
    pub equipment: i64,
    pub ar: i64,
    pub ap: i64,
    pub notes: i64,
    pub capital: i64,
    pub withdrawals: i64,
    pub revenue: i64,
    pub expense: i64,
}

impl AccountVector {
    /// The all-zero vector: a fresh ledger, or an untouched entry.
    pub const ZERO: AccountVector = AccountVector {
        cash: 0,
        supplies: 0,
        equipment: 0,
        ar: 0,
        ap: 0,
        notes: 0,
        capital: 0,
        withdrawals: 0,
        revenue: 0,
        expense: 0,
    };

    /// Read one account's amount.
    pub fn get(&self, account: Account) -> i64 {
        match account {
            Account::Cash => self.cash,
            Account::Supplies => self.supplies,
            Account::Equipment => self.equipment,
            Account::AccountsReceivable => self.ar,
            Account::AccountsPayable => self.ap,
            Account::NotesPayable => self.notes,
            Account::OwnerCapital => self.capital,
            Account::Withdrawals => self.withdrawals,
            Account::Revenue => self.revenue,
            Account::Expense => self.expense,
        }
    }

    /// Set one account's amount, clamped into the money range.
    pub fn set(&mut self, account: Account, amount: i64) {
        let amount = clamp_money(amount);
        match account {
            Account::Cash => self.cash = amount,
            Account::Supplies => self.supplies = amount,
            Account::Equipment => self.equipment = amount,
            Account::AccountsReceivable => self.ar = amount,
            Account::AccountsPayable => self.ap = amount,
            Account::NotesPayable => self.notes = amount,
            Account::OwnerCapital => self.capital = amount,
            Account::Withdrawals => self.withdrawals = amount,
            Account::Revenue => self.revenue = amount,
            Account::Expense => self.expense = amount,
        }
    }

    /// Iterate `(account, amount)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Account, i64)> + '_ {
        Account::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// True if every account is zero.
    pub fn is_zero(&self) -> bool {
        *self == AccountVector::ZERO
    }

    /// Return a copy with every account clamped into the money range.
    ///
    /// Catalog values arrive through serde without clamping; this normalizes
    /// them once at load.
    pub fn clamped(&self) -> AccountVector {
        let mut out = *self;
        for account in Account::ALL {
            out.set(account, self.get(account));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{MONEY_MAX, MONEY_MIN};

    #[test]
    fn keys_round_trip() {
        for account in Account::ALL {
            assert_eq!(Account::from_key(account.key()), Some(account));
        }
        assert_eq!(Account::from_key("goodwill"), None);
    }

    #[test]
    fn canonical_order_is_stable() {
        let keys: Vec<&str> = Account::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(
            keys,
            [
                "cash",
                "supplies",
                "equipment",
                "ar",
                "ap",
                "notes",
                "capital",
                "withdrawals",
                "revenue",
                "expense"
            ]
        );
    }

    #[test]
    fn classification_covers_all_accounts() {
        let assets = Account::ALL
            .iter()
            .filter(|a| a.classification() == Classification::Asset)
            .count();
        let liabilities = Account::ALL
            .iter()
            .filter(|a| a.classification() == Classification::Liability)
            .count();
        let equity = Account::ALL
            .iter()
            .filter(|a| a.classification() == Classification::Equity)
            .count();
        assert_eq!((assets, liabilities, equity), (4, 2, 4));
    }

    #[test]
    fn get_set_round_trip() {
        let mut v = AccountVector::ZERO;
        v.set(Account::Cash, 30_000);
        v.set(Account::OwnerCapital, 30_000);
        assert_eq!(v.get(Account::Cash), 30_000);
        assert_eq!(v.get(Account::OwnerCapital), 30_000);
        assert_eq!(v.get(Account::Supplies), 0);
        assert!(!v.is_zero());
    }

    #[test]
    fn set_clamps() {
        let mut v = AccountVector::ZERO;
        v.set(Account::Revenue, i64::MAX);
        v.set(Account::Expense, i64::MIN);
        assert_eq!(v.get(Account::Revenue), MONEY_MAX);
        assert_eq!(v.get(Account::Expense), MONEY_MIN);
    }

    #[test]
    fn partial_toml_deserializes_with_zero_defaults() {
        let v: AccountVector = toml::from_str("cash = -2500\nsupplies = 2500\n").unwrap();
        assert_eq!(v.cash, -2_500);
        assert_eq!(v.supplies, 2_500);
        assert_eq!(v.equipment, 0);
        assert_eq!(v.revenue, 0);
    }

    #[test]
    fn unknown_account_key_is_rejected() {
        let result: Result<AccountVector, _> = toml::from_str("goodwill = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn clamped_normalizes_out_of_range_fields() {
        let v = AccountVector {
            cash: i64::MAX,
            ..AccountVector::ZERO
        };
        assert_eq!(v.clamped().cash, MONEY_MAX);
    }
}
