//! The Equation Lab core: normalize, validate, apply, and the session that
//! strings them together.
//!
//! The commit policy is equality-only: a learner's entered delta is folded
//! into the running ledger if and only if it matches the expected delta on
//! every account. A mismatch is not an error, it is the lesson. The ledger is
//! left untouched and the mismatched accounts are reported for highlighting.

use crate::account::{Account, AccountVector};
use crate::bank::{Transaction, TransactionBank};
use crate::error::LabResult;
use crate::money::{clamp_money, parse_amount};

// ── Entry form ──────────────────────────────────────────────────────────

/// Raw learner input: one text field per account, mutable until checked.
///
/// Cleared whenever the current transaction changes and on explicit clear.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    // Indexed by the Account discriminant, which matches Account::ALL order.
    fields: [String; 10],
}

impl EntryForm {
    /// The raw text for one account's field.
    pub fn get(&self, account: Account) -> &str {
        &self.fields[account as usize]
    }

    /// Mutable access to one account's field (TUI text editing).
    pub fn field_mut(&mut self, account: Account) -> &mut String {
        &mut self.fields[account as usize]
    }

    /// Overwrite one account's field.
    pub fn set(&mut self, account: Account, text: impl Into<String>) {
        self.fields[account as usize] = text.into();
    }

    /// Clear every field.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

// ── Normalize / validate / apply ────────────────────────────────────────

/// Parse every form field into a clamped amount.
///
/// Forgiving input: empty, a lone `-`, or unparseable text all read as 0.
pub fn normalize(form: &EntryForm) -> AccountVector {
    let mut out = AccountVector::ZERO;
    for account in Account::ALL {
        out.set(account, parse_amount(form.get(account)));
    }
    out
}

/// Result of checking an entered delta against the answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// True iff every account matched exactly.
    pub ok: bool,
    /// Accounts where entered != expected, in canonical order.
    pub mismatches: Vec<Account>,
    /// The normalized entered delta, for display.
    pub entered: AccountVector,
    /// The answer key it was checked against.
    pub expected: AccountVector,
}

/// Compare an entered delta against the expected delta, account by account.
///
/// Exact integer equality, no tolerance.
pub fn validate(entered: &AccountVector, expected: &AccountVector) -> CheckReport {
    let mismatches: Vec<Account> = Account::ALL
        .into_iter()
        .filter(|&a| entered.get(a) != expected.get(a))
        .collect();

    CheckReport {
        ok: mismatches.is_empty(),
        mismatches,
        entered: *entered,
        expected: *expected,
    }
}

/// Fold a delta into a ledger, producing a new ledger.
///
/// Pure: the input ledger is never mutated, so a caller holding the prior
/// ledger still sees it unchanged.
pub fn apply(ledger: &AccountVector, delta: &AccountVector) -> AccountVector {
    let mut next = AccountVector::ZERO;
    for account in Account::ALL {
        next.set(account, clamp_money(ledger.get(account) + delta.get(account)));
    }
    next
}

// ── Lab session ─────────────────────────────────────────────────────────

/// One learner's in-memory Equation Lab session: the running ledger, the
/// current transaction index, the entry form, and the last check result.
///
/// Single-threaded and synchronous; every operation completes within the
/// triggering UI event. Nothing persists across process restarts.
#[derive(Debug, Clone)]
pub struct LabSession {
    bank: TransactionBank,
    ledger: AccountVector,
    index: usize,
    form: EntryForm,
    last_check: Option<CheckReport>,
}

impl LabSession {
    /// Start a session over a catalog: zero ledger, first transaction.
    pub fn new(bank: TransactionBank) -> Self {
        Self {
            bank,
            ledger: AccountVector::ZERO,
            index: 0,
            form: EntryForm::default(),
            last_check: None,
        }
    }

    /// Start a session over the bundled chapter-1 catalog.
    pub fn bundled() -> LabResult<Self> {
        Ok(Self::new(TransactionBank::bundled()?))
    }

    pub fn bank(&self) -> &TransactionBank {
        &self.bank
    }

    /// The current running ledger.
    pub fn ledger(&self) -> &AccountVector {
        &self.ledger
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The transaction currently being analyzed.
    pub fn current(&self) -> &Transaction {
        self.bank.get(self.index)
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    /// The result of the most recent check or submit, if any.
    pub fn last_check(&self) -> Option<&CheckReport> {
        self.last_check.as_ref()
    }

    /// Normalize + validate without touching the ledger ("check only").
    pub fn check_only(&mut self) -> &CheckReport {
        let entered = normalize(&self.form);
        let report = validate(&entered, &self.current().expected);
        self.last_check.insert(report)
    }

    /// Normalize + validate, and on a full match fold the delta into the
    /// running ledger. A mismatch leaves the ledger untouched.
    pub fn submit(&mut self) -> &CheckReport {
        let entered = normalize(&self.form);
        let report = validate(&entered, &self.current().expected);

        if report.ok {
            self.ledger = apply(&self.ledger, &report.entered);
            tracing::debug!(txn = %self.current().id, "delta applied to ledger");
        } else {
            tracing::debug!(
                txn = %self.current().id,
                mismatches = report.mismatches.len(),
                "submit rejected"
            );
        }

        self.last_check.insert(report)
    }

    /// Move to the next transaction, clamped at the last index.
    pub fn next(&mut self) {
        self.jump_to(self.index.saturating_add(1));
    }

    /// Move to the previous transaction, clamped at 0.
    pub fn previous(&mut self) {
        self.jump_to(self.index.saturating_sub(1));
    }

    /// Jump to an arbitrary transaction, clamped into range. Any index
    /// change clears the entry form and the last check result.
    pub fn jump_to(&mut self, index: usize) {
        let clamped = index.min(self.bank.len() - 1);
        if clamped != self.index {
            self.index = clamped;
        }
        // Navigation always resets per-transaction input, even when the
        // index did not actually move.
        self.clear_entry();
    }

    /// Clear the entry form and last check, keeping ledger and position.
    pub fn clear_entry(&mut self) {
        self.form.clear();
        self.last_check = None;
    }

    /// Full reset: zero ledger, first transaction, empty entry.
    pub fn reset_all(&mut self) {
        self.ledger = AccountVector::ZERO;
        self.index = 0;
        self.clear_entry();
        tracing::debug!("lab session reset");
    }

    /// Display progress through the catalog: `round(100 * index / len)`.
    pub fn progress_percent(&self) -> u8 {
        ((self.index as f64 / self.bank.len() as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> LabSession {
        LabSession::bundled().unwrap()
    }

    fn fill(form: &mut EntryForm, entries: &[(Account, &str)]) {
        for (account, text) in entries {
            form.set(*account, *text);
        }
    }

    #[test]
    fn normalize_treats_blank_fields_as_zero() {
        let mut form = EntryForm::default();
        form.set(Account::Cash, "");
        form.set(Account::Supplies, "-");
        form.set(Account::Equipment, "junk");
        let v = normalize(&form);
        assert!(v.is_zero());
    }

    #[test]
    fn normalize_parses_and_clamps() {
        let mut form = EntryForm::default();
        fill(
            &mut form,
            &[
                (Account::Cash, "-2500"),
                (Account::Supplies, " 2500 "),
                (Account::Revenue, "99999999999"),
            ],
        );
        let v = normalize(&form);
        assert_eq!(v.cash, -2_500);
        assert_eq!(v.supplies, 2_500);
        assert_eq!(v.revenue, crate::money::MONEY_MAX);
    }

    #[test]
    fn answer_key_validates_against_itself() {
        let bank = TransactionBank::bundled().unwrap();
        for txn in bank.all() {
            let report = validate(&txn.expected, &txn.expected);
            assert!(report.ok, "answer key for {} should self-validate", txn.id);
            assert!(report.mismatches.is_empty());
        }
    }

    #[test]
    fn validate_reports_mismatched_accounts_in_order() {
        let mut entered = AccountVector::ZERO;
        entered.set(Account::Cash, 100);

        let mut expected = AccountVector::ZERO;
        expected.set(Account::Cash, -2_500);
        expected.set(Account::Supplies, 2_500);

        let report = validate(&entered, &expected);
        assert!(!report.ok);
        assert_eq!(report.mismatches, vec![Account::Cash, Account::Supplies]);
    }

    #[test]
    fn apply_is_pure_and_accumulates() {
        let mut d1 = AccountVector::ZERO;
        d1.set(Account::Cash, 30_000);
        d1.set(Account::OwnerCapital, 30_000);

        let mut d2 = AccountVector::ZERO;
        d2.set(Account::Cash, -2_500);
        d2.set(Account::Supplies, 2_500);

        let base = AccountVector::ZERO;
        let step1 = apply(&base, &d1);
        let step2 = apply(&step1, &d2);

        // The base ledger is untouched.
        assert!(base.is_zero());

        // Sequential application equals applying the summed delta.
        let summed = apply(&d1, &d2);
        assert_eq!(step2, apply(&base, &summed));
        assert_eq!(step2.cash, 27_500);
        assert_eq!(step2.supplies, 2_500);
    }

    #[test]
    fn apply_clamps_each_account() {
        let mut near_max = AccountVector::ZERO;
        near_max.set(Account::Cash, crate::money::MONEY_MAX);

        let mut delta = AccountVector::ZERO;
        delta.set(Account::Cash, 1);

        let next = apply(&near_max, &delta);
        assert_eq!(next.cash, crate::money::MONEY_MAX);
    }

    #[test]
    fn submit_correct_delta_updates_ledger() {
        let mut s = session();
        fill(
            s.form_mut(),
            &[(Account::Cash, "30000"), (Account::OwnerCapital, "30000")],
        );

        let report = s.submit();
        assert!(report.ok);
        assert_eq!(s.ledger().cash, 30_000);
        assert_eq!(s.ledger().capital, 30_000);
    }

    #[test]
    fn submit_wrong_delta_leaves_ledger_untouched() {
        let mut s = session();
        s.jump_to(1); // T2: cash -2500, supplies 2500
        fill(s.form_mut(), &[(Account::Cash, "100")]);

        let report = s.submit().clone();
        assert!(!report.ok);
        assert_eq!(report.mismatches, vec![Account::Cash, Account::Supplies]);
        assert!(s.ledger().is_zero());
    }

    #[test]
    fn check_only_never_applies() {
        let mut s = session();
        fill(
            s.form_mut(),
            &[(Account::Cash, "30000"), (Account::OwnerCapital, "30000")],
        );

        let report = s.check_only().clone();
        assert!(report.ok);
        assert!(s.ledger().is_zero());
    }

    #[test]
    fn navigation_clamps_and_resets_entry() {
        let mut s = session();
        s.previous();
        assert_eq!(s.current_index(), 0);

        s.form_mut().set(Account::Cash, "42");
        s.next();
        assert_eq!(s.current_index(), 1);
        assert!(s.form().is_empty());
        assert!(s.last_check().is_none());

        s.jump_to(999);
        assert_eq!(s.current_index(), 10);
        s.next();
        assert_eq!(s.current_index(), 10);
    }

    #[test]
    fn reset_all_returns_to_initial_state() {
        let mut s = session();
        fill(
            s.form_mut(),
            &[(Account::Cash, "30000"), (Account::OwnerCapital, "30000")],
        );
        s.submit();
        s.next();

        s.reset_all();
        assert_eq!(s.current_index(), 0);
        assert!(s.ledger().is_zero());
        assert!(s.form().is_empty());
        assert!(s.last_check().is_none());
    }

    #[test]
    fn progress_percent_matches_rounded_formula() {
        let mut s = session();
        assert_eq!(s.progress_percent(), 0);
        s.jump_to(5);
        // round(100 * 5 / 11) = 45
        assert_eq!(s.progress_percent(), 45);
        s.jump_to(10);
        assert_eq!(s.progress_percent(), 91);
    }
}
