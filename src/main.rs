//! eqlab CLI: interactive accounting-equation trainer.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use equation_lab::account::AccountVector;
use equation_lab::bank::TransactionBank;
use equation_lab::equation::evaluate;
use equation_lab::lab::{apply, validate};
use equation_lab::money::format_money;
use equation_lab::quiz::QuizBank;
use equation_lab::sheet::ReviewSheet;

#[derive(Parser)]
#[command(name = "eqlab", version, about = "Interactive accounting-equation trainer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default).
    Tui,

    /// Inspect the transaction catalog.
    Bank {
        #[command(subcommand)]
        action: BankAction,
    },

    /// Apply every expected delta in catalog order, printing the running
    /// ledger and equation check after each transaction.
    Walkthrough,

    /// Export a catalog as JSON.
    Export {
        #[command(subcommand)]
        action: ExportAction,
    },

    /// Show catalog statistics.
    Info,
}

#[derive(Subcommand)]
enum BankAction {
    /// List all transactions.
    List,
    /// Show one transaction with its expected delta.
    Show {
        /// Transaction id (e.g. T4) or zero-based index.
        id_or_index: String,
    },
}

#[derive(Subcommand)]
enum ExportAction {
    /// Export the transaction catalog as JSON.
    Transactions,
    /// Export the quiz catalog as JSON.
    Quiz,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            equation_lab::tui::launch()?;
        }

        Commands::Bank { action } => {
            let bank = TransactionBank::bundled()?;

            match action {
                BankAction::List => {
                    println!("{} ({} v{})", bank.name(), bank.catalog_id(), bank.version());
                    println!("{}", bank.description());
                    println!();
                    for txn in bank.all() {
                        println!(
                            "  {:<4} {:<28} {}",
                            txn.id,
                            txn.title,
                            format_money(txn.amount)
                        );
                    }
                }
                BankAction::Show { id_or_index } => {
                    let index = match id_or_index.parse::<usize>() {
                        Ok(i) => i.min(bank.len() - 1),
                        Err(_) => bank.index_of(&id_or_index)?,
                    };
                    let txn = bank.get(index);

                    println!("Transaction {} — {}", txn.id, txn.title);
                    println!("  story:  {}", txn.story);
                    println!("  amount: {}", format_money(txn.amount));
                    println!("  hint:   {}", txn.hint);
                    println!("  expected delta:");
                    for (account, amount) in txn.expected.entries() {
                        if amount != 0 {
                            println!("    {:<22} {}", account.label(), format_money(amount));
                        }
                    }
                }
            }
        }

        Commands::Walkthrough => {
            let bank = TransactionBank::bundled()?;
            let mut ledger = AccountVector::ZERO;

            println!("Walkthrough: applying the answer key for {} transactions.\n", bank.len());
            for txn in bank.all() {
                let report = validate(&txn.expected, &txn.expected);
                debug_assert!(report.ok);
                ledger = apply(&ledger, &txn.expected);

                let summary = evaluate(&ledger);
                println!("{} {} — {}", txn.id, txn.title, format_money(txn.amount));
                println!("    {summary}");
            }

            println!("\nFinal ledger:");
            for (account, amount) in ledger.entries() {
                println!("  {:<22} {}", account.label(), format_money(amount));
            }
            println!("  {}", evaluate(&ledger));
        }

        Commands::Export { action } => match action {
            ExportAction::Transactions => {
                let bank = TransactionBank::bundled()?;
                let json = serde_json::to_string_pretty(&bank.export()).into_diagnostic()?;
                println!("{json}");
            }
            ExportAction::Quiz => {
                let quiz = QuizBank::bundled()?;
                let json = serde_json::to_string_pretty(quiz.all()).into_diagnostic()?;
                println!("{json}");
            }
        },

        Commands::Info => {
            let bank = TransactionBank::bundled()?;
            let quiz = QuizBank::bundled()?;
            let sheet = ReviewSheet::bundled()?;

            println!("equation-lab catalogs");
            println!("  transactions: {:>3}  ({}, v{})", bank.len(), bank.name(), bank.version());
            println!("  quiz items:   {:>3}  ({}, v{})", quiz.len(), quiz.name(), quiz.version());
            println!("  sheet parts:  {:>3}  ({})", sheet.sections().len(), sheet.name());
        }
    }

    Ok(())
}
