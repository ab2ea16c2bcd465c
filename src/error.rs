//! Diagnostic error types for equation-lab.
//!
//! Runtime operations in the lab are deliberately infallible: malformed input
//! degrades to zero, a wrong answer is a mismatch report, and out-of-range
//! navigation is clamped. The only real failure surface is loading a bundled
//! catalog, so each catalog defines its own error type with miette
//! `#[diagnostic]` derives carrying error codes and help text.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for equation-lab.
///
/// Each variant wraps a catalog-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum LabError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sheet(#[from] SheetError),
}

// ---------------------------------------------------------------------------
// Transaction bank errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BankError {
    #[error("failed to parse transaction catalog: {message}")]
    #[diagnostic(
        code(eqlab::bank::parse),
        help(
            "Check the catalog TOML syntax. Each [[transactions]] entry needs \
             id, title, story, amount, hint, and a [transactions.expected] \
             table whose keys are account names (cash, supplies, equipment, \
             ar, ap, notes, capital, withdrawals, revenue, expense)."
        )
    )]
    Parse { message: String },

    #[error("transaction catalog is empty")]
    #[diagnostic(
        code(eqlab::bank::empty),
        help("The catalog must contain at least one transaction.")
    )]
    Empty,

    #[error("duplicate transaction id: {id}")]
    #[diagnostic(
        code(eqlab::bank::duplicate_id),
        help("Transaction ids must be unique; they are used for jump navigation.")
    )]
    DuplicateId { id: String },

    #[error("transaction not found: {id}")]
    #[diagnostic(
        code(eqlab::bank::not_found),
        help("List available transactions with `eqlab bank list`.")
    )]
    NotFound { id: String },
}

// ---------------------------------------------------------------------------
// Quiz errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum QuizError {
    #[error("failed to parse quiz catalog: {message}")]
    #[diagnostic(
        code(eqlab::quiz::parse),
        help(
            "Check the quiz TOML syntax. Each [[items]] entry needs question, \
             options, answer, explanation, and topic."
        )
    )]
    Parse { message: String },

    #[error("quiz catalog is empty")]
    #[diagnostic(
        code(eqlab::quiz::empty),
        help("The quiz must contain at least one question.")
    )]
    Empty,

    #[error("question {index} has answer index {answer} but only {options} options")]
    #[diagnostic(
        code(eqlab::quiz::bad_answer),
        help("The answer field is a zero-based index into the options list.")
    )]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        options: usize,
    },
}

// ---------------------------------------------------------------------------
// Quick-sheet errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SheetError {
    #[error("failed to parse quick-sheet catalog: {message}")]
    #[diagnostic(
        code(eqlab::sheet::parse),
        help("Check the quick-sheet TOML syntax: [[sections]] entries with title and bullets.")
    )]
    Parse { message: String },

    #[error("quick-sheet catalog is empty")]
    #[diagnostic(
        code(eqlab::sheet::empty),
        help("The quick sheet must contain at least one section.")
    )]
    Empty,
}

/// Convenience alias for functions returning equation-lab results.
pub type LabResult<T> = std::result::Result<T, LabError>;
