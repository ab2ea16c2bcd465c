//! Instructional reference content: the quick-review sheet, the transaction
//! patterns, the step-by-step coach script, and the quest stages.
//!
//! The quick sheet is a TOML bundle like the other catalogs. The patterns,
//! coach steps, and quest stages are small fixed scripts, kept as consts.

use serde::Deserialize;

use crate::error::SheetError;

// ── Quick sheet ─────────────────────────────────────────────────────────

/// One titled bullet-list section of the quick sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSection {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SheetToml {
    catalog: CatalogMeta,
    #[serde(default)]
    sections: Vec<ReviewSection>,
}

#[derive(Debug, Deserialize)]
struct CatalogMeta {
    id: String,
    name: String,
}

const CHAPTER1_SHEET_TOML: &str = include_str!("../data/quick_sheet.toml");

/// The one-page revision sheet.
#[derive(Debug, Clone)]
pub struct ReviewSheet {
    id: String,
    name: String,
    sections: Vec<ReviewSection>,
}

impl ReviewSheet {
    /// Load the bundled chapter-1 quick sheet.
    pub fn bundled() -> Result<Self, SheetError> {
        Self::from_toml_str(CHAPTER1_SHEET_TOML)
    }

    /// Parse a quick sheet from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SheetError> {
        let parsed: SheetToml = toml::from_str(toml_str).map_err(|e| SheetError::Parse {
            message: e.to_string(),
        })?;

        if parsed.sections.is_empty() {
            return Err(SheetError::Empty);
        }

        Ok(Self {
            id: parsed.catalog.id,
            name: parsed.catalog.name,
            sections: parsed.sections,
        })
    }

    pub fn sections(&self) -> &[ReviewSection] {
        &self.sections
    }

    pub fn catalog_id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// ── Transaction patterns ────────────────────────────────────────────────

/// The seven memorizable transaction patterns, shown in the sheet and in
/// check feedback when the learner is stuck.
pub const PATTERNS: [&str; 7] = [
    "Cash sale: Cash up, Revenue up",
    "Credit sale: A/R up, Revenue up",
    "Pay expense: Cash down, Expense up",
    "Buy on credit: Asset up, A/P up",
    "Pay A/P: Cash down, A/P down",
    "Owner invest: Cash up, Capital up",
    "Owner withdraw: Cash down, Withdrawals up",
];

// ── Step coach ──────────────────────────────────────────────────────────

/// One step of the transaction-analysis coach.
#[derive(Debug, Clone, Copy)]
pub struct CoachStep {
    pub title: &'static str,
    pub body: &'static str,
}

/// The five-step analysis script. The current step index is view-local
/// state, reset whenever the transaction changes.
pub const COACH_STEPS: [CoachStep; 5] = [
    CoachStep {
        title: "1) Read the story",
        body: "Who is involved? What happened? Is it cash, credit, expense, \
               revenue, owner action, or liability?",
    },
    CoachStep {
        title: "2) Pick the accounts",
        body: "Choose which accounts change (at least TWO). Example: Cash + \
               Revenue, or Supplies + Accounts Payable.",
    },
    CoachStep {
        title: "3) Decide direction",
        body: "For each chosen account, decide Increase or Decrease.",
    },
    CoachStep {
        title: "4) Enter amounts",
        body: "Same amount on both sides of the equation (but could be \
               different accounts). Use negative for a decrease.",
    },
    CoachStep {
        title: "5) Balance check",
        body: "Confirm Assets = Liabilities + Equity still holds. If not, \
               re-check accounts and directions.",
    },
];

// ── Quest stages ────────────────────────────────────────────────────────

/// One stage of the guided quest.
#[derive(Debug, Clone, Copy)]
pub struct QuestStage {
    pub title: &'static str,
    pub body: &'static str,
}

/// The four-stage study path: equation, patterns, lab, quiz.
pub const QUEST_STAGES: [QuestStage; 4] = [
    QuestStage {
        title: "Level 1 — Learn the equation",
        body: "Memorize: Assets = Liabilities + Equity. Then memorize: \
               Equity = Capital + Revenues - Expenses - Withdrawals.",
    },
    QuestStage {
        title: "Level 2 — Learn the 7 transaction patterns",
        body: "Cash sale (Cash up, Rev up), Credit sale (A/R up, Rev up), \
               Pay expense (Cash down, Exp up), Buy on credit (Asset up, A/P up), \
               Pay A/P (Cash down, A/P down), Owner invest (Cash up, Capital up), \
               Owner withdraw (Cash down, Withdrawals up).",
    },
    QuestStage {
        title: "Level 3 — Play the Equation Lab step by step",
        body: "Go to the Lab tab and solve T1 through T11. Use the coach to \
               guide you through each transaction.",
    },
    QuestStage {
        title: "Level 4 — Practice quiz",
        body: "Try the practice questions in the Quiz tab. If you miss any, \
               return to the Sheet tab for review.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sheet_parses() {
        let sheet = ReviewSheet::bundled().unwrap();
        assert_eq!(sheet.catalog_id(), "chapter1-sheet");
        assert_eq!(sheet.sections().len(), 7);
        for section in sheet.sections() {
            assert!(!section.title.is_empty());
            assert!(!section.bullets.is_empty());
        }
    }

    #[test]
    fn sheet_covers_the_equation() {
        let sheet = ReviewSheet::bundled().unwrap();
        assert!(
            sheet
                .sections()
                .iter()
                .any(|s| s.bullets.iter().any(|b| b.contains("Assets = Liabilities + Equity")))
        );
    }

    #[test]
    fn empty_sheet_is_rejected() {
        let toml = r#"
            [catalog]
            id = "empty"
            name = "Empty"
        "#;
        assert!(matches!(
            ReviewSheet::from_toml_str(toml),
            Err(SheetError::Empty)
        ));
    }

    #[test]
    fn coach_and_quest_scripts_are_complete() {
        assert_eq!(COACH_STEPS.len(), 5);
        assert_eq!(QUEST_STAGES.len(), 4);
        assert_eq!(PATTERNS.len(), 7);
    }
}
