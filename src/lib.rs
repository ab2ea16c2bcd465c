//! # equation-lab
//!
//! An interactive trainer for the fundamental accounting equation
//! (Assets = Liabilities + Equity): guided transaction analysis, a practice
//! quiz, and a one-page review sheet.
//!
//! ## Architecture
//!
//! - **Accounts** (`account`): the ten named accounts and the `AccountVector`
//!   value type every ledger and delta is made of
//! - **Transaction bank** (`bank`): bundled TOML catalog of instructional
//!   transactions with authoritative expected deltas
//! - **Lab core** (`lab`): normalize / validate / apply and the session state
//!   machine with an equality-only commit policy
//! - **Equation evaluator** (`equation`): pure balance check over a ledger
//! - **Quiz** (`quiz`): multiple-choice practice with single-credit scoring
//! - **TUI** (`tui`): ratatui front end with Quest, Lab, Sheet, and Quiz tabs
//!
//! ## Library usage
//!
//! ```
//! use equation_lab::account::Account;
//! use equation_lab::equation::evaluate;
//! use equation_lab::lab::LabSession;
//!
//! let mut session = LabSession::bundled().unwrap();
//! session.form_mut().set(Account::Cash, "30000");
//! session.form_mut().set(Account::OwnerCapital, "30000");
//! assert!(session.submit().ok);
//! assert!(evaluate(session.ledger()).balanced);
//! ```

pub mod account;
pub mod bank;
pub mod equation;
pub mod error;
pub mod lab;
pub mod money;
pub mod quiz;
pub mod sheet;
pub mod tui;
