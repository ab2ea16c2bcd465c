//! The transaction bank: an ordered, read-only catalog of instructional
//! transactions.
//!
//! The catalog is a TOML bundle compiled into the binary via `include_str!`,
//! parsed once at startup. Each transaction carries a story, a display amount,
//! a hint, and the authoritative expected delta the learner's entry is
//! validated against.

use serde::{Deserialize, Serialize};

use crate::account::AccountVector;
use crate::equation::evaluate;
use crate::error::BankError;
use crate::lab::apply;

// ── Catalog data model ──────────────────────────────────────────────────

/// One instructional transaction.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Unique, ordering-significant id (e.g. `T1`).
    pub id: String,
    pub title: String,
    /// The narrative the learner analyzes.
    pub story: String,
    /// Headline amount shown with the story. Informational only; validation
    /// uses `expected`, never this.
    pub amount: i64,
    /// The answer key: the exact per-account delta this transaction causes.
    pub expected: AccountVector,
    pub hint: String,
}

/// Flat record for JSON export of a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionExport {
    pub id: String,
    pub title: String,
    pub story: String,
    pub amount: i64,
    pub expected: AccountVector,
    pub hint: String,
}

// ── TOML deserialization helpers ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct BankToml {
    catalog: CatalogMeta,
    #[serde(default)]
    transactions: Vec<TransactionToml>,
}

#[derive(Debug, Deserialize)]
struct CatalogMeta {
    id: String,
    name: String,
    version: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct TransactionToml {
    id: String,
    title: String,
    story: String,
    amount: i64,
    hint: String,
    #[serde(default)]
    expected: AccountVector,
}

// ── Transaction bank ────────────────────────────────────────────────────

const CHAPTER1_TOML: &str = include_str!("../data/transactions.toml");

/// Ordered, process-wide constant catalog of transactions.
#[derive(Debug, Clone)]
pub struct TransactionBank {
    id: String,
    name: String,
    version: String,
    description: String,
    transactions: Vec<Transaction>,
}

impl TransactionBank {
    /// Load the bundled chapter-1 catalog.
    pub fn bundled() -> Result<Self, BankError> {
        Self::from_toml_str(CHAPTER1_TOML)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, BankError> {
        let parsed: BankToml = toml::from_str(toml_str).map_err(|e| BankError::Parse {
            message: e.to_string(),
        })?;

        if parsed.transactions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut transactions = Vec::with_capacity(parsed.transactions.len());
        for t in parsed.transactions {
            if transactions.iter().any(|x: &Transaction| x.id == t.id) {
                return Err(BankError::DuplicateId { id: t.id });
            }

            let expected = t.expected.clamped();
            // Each catalog delta must keep the equation balanced in isolation.
            // A violation is a content bug, not a load failure.
            if !evaluate(&apply(&AccountVector::ZERO, &expected)).balanced {
                tracing::warn!(id = %t.id, "transaction delta does not balance in isolation");
            }

            transactions.push(Transaction {
                id: t.id,
                title: t.title,
                story: t.story,
                amount: t.amount,
                expected,
                hint: t.hint,
            });
        }

        tracing::info!(
            catalog = %parsed.catalog.id,
            count = transactions.len(),
            "loaded transaction catalog"
        );

        Ok(Self {
            id: parsed.catalog.id,
            name: parsed.catalog.name,
            version: parsed.catalog.version,
            description: parsed.catalog.description,
            transactions,
        })
    }

    /// Number of transactions in the catalog.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by index, clamped into range.
    pub fn get(&self, index: usize) -> &Transaction {
        let clamped = index.min(self.transactions.len() - 1);
        if clamped != index {
            tracing::debug!(index, clamped, "clamped out-of-range transaction index");
        }
        &self.transactions[clamped]
    }

    /// All transactions in catalog order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Find a transaction's index by its id (case-insensitive).
    pub fn index_of(&self, id: &str) -> Result<usize, BankError> {
        self.transactions
            .iter()
            .position(|t| t.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| BankError::NotFound { id: id.to_string() })
    }

    pub fn catalog_id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Export the full catalog as flat records.
    pub fn export(&self) -> Vec<TransactionExport> {
        self.transactions
            .iter()
            .map(|t| TransactionExport {
                id: t.id.clone(),
                title: t.title.clone(),
                story: t.story.clone(),
                amount: t.amount,
                expected: t.expected,
                hint: t.hint.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let bank = TransactionBank::bundled().unwrap();
        assert_eq!(bank.len(), 11);
        assert_eq!(bank.catalog_id(), "chapter1");
        assert_eq!(bank.get(0).id, "T1");
        assert_eq!(bank.get(10).id, "T11");
    }

    #[test]
    fn t1_expected_delta_matches_story() {
        let bank = TransactionBank::bundled().unwrap();
        let t1 = bank.get(0);
        assert_eq!(t1.amount, 30_000);
        assert_eq!(t1.expected.cash, 30_000);
        assert_eq!(t1.expected.capital, 30_000);
        assert_eq!(t1.expected.supplies, 0);
    }

    #[test]
    fn out_of_range_get_clamps_to_last() {
        let bank = TransactionBank::bundled().unwrap();
        assert_eq!(bank.get(999).id, "T11");
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let bank = TransactionBank::bundled().unwrap();
        assert_eq!(bank.index_of("T4").unwrap(), 3);
        assert_eq!(bank.index_of("t4").unwrap(), 3);
        assert!(bank.index_of("T99").is_err());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let toml = r#"
            [catalog]
            id = "empty"
            name = "Empty"
            version = "1.0"
            description = "no transactions"
        "#;
        assert!(matches!(
            TransactionBank::from_toml_str(toml),
            Err(BankError::Empty)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let toml = r#"
            [catalog]
            id = "dup"
            name = "Dup"
            version = "1.0"
            description = "duplicate ids"

            [[transactions]]
            id = "T1"
            title = "a"
            story = "a"
            amount = 1
            hint = "a"
            [transactions.expected]
            cash = 1
            capital = 1

            [[transactions]]
            id = "T1"
            title = "b"
            story = "b"
            amount = 1
            hint = "b"
            [transactions.expected]
            cash = 1
            capital = 1
        "#;
        assert!(matches!(
            TransactionBank::from_toml_str(toml),
            Err(BankError::DuplicateId { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            TransactionBank::from_toml_str("not toml ["),
            Err(BankError::Parse { .. })
        ));
    }

    #[test]
    fn export_preserves_catalog_order() {
        let bank = TransactionBank::bundled().unwrap();
        let exports = bank.export();
        assert_eq!(exports.len(), bank.len());
        assert_eq!(exports[1].id, "T2");
        assert_eq!(exports[1].expected.cash, -2_500);
    }
}
