//! The practice quiz: a read-only bank of multiple-choice items and the
//! session that tracks picks and score.
//!
//! Scoring credits each question at most once, the first time it is answered
//! correctly. Revisiting an answered question and picking again never changes
//! the score, in either direction.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

// ── Catalog data model ──────────────────────────────────────────────────

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    /// Ordered answer options.
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub answer: usize,
    /// Shown after the learner picks.
    pub explanation: String,
    /// Topic tag (e.g. "Users", "Equation").
    pub topic: String,
}

#[derive(Debug, Deserialize)]
struct QuizToml {
    catalog: CatalogMeta,
    #[serde(default)]
    items: Vec<QuizItem>,
}

#[derive(Debug, Deserialize)]
struct CatalogMeta {
    id: String,
    name: String,
    version: String,
    description: String,
}

// ── Quiz bank ───────────────────────────────────────────────────────────

const CHAPTER1_QUIZ_TOML: &str = include_str!("../data/quiz.toml");

/// Ordered, read-only catalog of quiz items.
#[derive(Debug, Clone)]
pub struct QuizBank {
    id: String,
    name: String,
    version: String,
    description: String,
    items: Vec<QuizItem>,
}

impl QuizBank {
    /// Load the bundled chapter-1 practice quiz.
    pub fn bundled() -> Result<Self, QuizError> {
        Self::from_toml_str(CHAPTER1_QUIZ_TOML)
    }

    /// Parse a quiz catalog from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, QuizError> {
        let parsed: QuizToml = toml::from_str(toml_str).map_err(|e| QuizError::Parse {
            message: e.to_string(),
        })?;

        if parsed.items.is_empty() {
            return Err(QuizError::Empty);
        }

        for (index, item) in parsed.items.iter().enumerate() {
            if item.answer >= item.options.len() {
                return Err(QuizError::AnswerOutOfRange {
                    index,
                    answer: item.answer,
                    options: item.options.len(),
                });
            }
        }

        tracing::info!(
            catalog = %parsed.catalog.id,
            count = parsed.items.len(),
            "loaded quiz catalog"
        );

        Ok(Self {
            id: parsed.catalog.id,
            name: parsed.catalog.name,
            version: parsed.catalog.version,
            description: parsed.catalog.description,
            items: parsed.items,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by index, clamped into range.
    pub fn get(&self, index: usize) -> &QuizItem {
        &self.items[index.min(self.items.len() - 1)]
    }

    pub fn all(&self) -> &[QuizItem] {
        &self.items
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
}

// ── Quiz session ────────────────────────────────────────────────────────

/// One learner's in-memory quiz state.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuizBank,
    index: usize,
    score: usize,
    /// The option picked for the current question, if any.
    selected: Option<usize>,
    /// Whether the answer/explanation is revealed for the current question.
    revealed: bool,
    /// Per-question credit flags, so a question scores at most once.
    credited: Vec<bool>,
}

impl QuizSession {
    pub fn new(bank: QuizBank) -> Self {
        let credited = vec![false; bank.len()];
        Self {
            bank,
            index: 0,
            score: 0,
            selected: None,
            revealed: false,
            credited,
        }
    }

    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(QuizBank::bundled()?))
    }

    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &QuizItem {
        self.bank.get(self.index)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// True once the current question's answer is shown.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Pick an option for the current question.
    ///
    /// Reveals the answer. The first correct pick for a question credits the
    /// score, exactly once for the lifetime of the session; later picks
    /// (after navigation back and forth) never re-credit. Picks while the
    /// answer is already revealed, or with an out-of-range option index, are
    /// ignored.
    pub fn pick(&mut self, option: usize) {
        if self.revealed || option >= self.current().options.len() {
            return;
        }

        self.selected = Some(option);
        self.revealed = true;

        if option == self.current().answer && !self.credited[self.index] {
            self.credited[self.index] = true;
            self.score += 1;
            tracing::debug!(question = self.index, score = self.score, "quiz credit");
        }
    }

    /// Move to the next question, clamped at the last.
    pub fn next(&mut self) {
        self.jump_to(self.index.saturating_add(1));
    }

    /// Move to the previous question, clamped at 0.
    pub fn previous(&mut self) {
        self.jump_to(self.index.saturating_sub(1));
    }

    /// Jump to a question, clamped into range. Clears the current selection
    /// and reveal state but keeps earned credit.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index.min(self.bank.len() - 1);
        self.selected = None;
        self.revealed = false;
    }

    /// Reset score, credit, and position.
    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.revealed = false;
        self.credited.fill(false);
    }

    /// Display progress: `round(100 * (index + 1) / len)`.
    pub fn progress_percent(&self) -> u8 {
        (((self.index + 1) as f64 / self.bank.len() as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuizSession {
        QuizSession::bundled().unwrap()
    }

    #[test]
    fn bundled_quiz_parses() {
        let bank = QuizBank::bundled().unwrap();
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.catalog_id(), "chapter1-practice");
        for item in bank.all() {
            assert!(item.answer < item.options.len());
            assert!(!item.explanation.is_empty());
        }
    }

    #[test]
    fn correct_pick_scores_once() {
        let mut s = session();
        let answer = s.current().answer;
        s.pick(answer);
        assert_eq!(s.score(), 1);
        assert!(s.revealed());
        assert_eq!(s.selected(), Some(answer));
    }

    #[test]
    fn wrong_pick_never_scores() {
        let mut s = session();
        let wrong = (s.current().answer + 1) % s.current().options.len();
        s.pick(wrong);
        assert_eq!(s.score(), 0);
        assert!(s.revealed());
    }

    #[test]
    fn revisiting_an_answered_question_does_not_double_count() {
        let mut s = session();
        let answer = s.current().answer;
        s.pick(answer);
        assert_eq!(s.score(), 1);

        s.next();
        s.previous();
        assert!(!s.revealed());

        let answer = s.current().answer;
        s.pick(answer);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn wrong_then_right_after_revisit_scores_once() {
        let mut s = session();
        let wrong = (s.current().answer + 1) % s.current().options.len();
        s.pick(wrong);
        assert_eq!(s.score(), 0);

        s.next();
        s.previous();
        s.pick(s.current().answer);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn pick_after_reveal_is_ignored() {
        let mut s = session();
        let answer = s.current().answer;
        let wrong = (answer + 1) % s.current().options.len();
        s.pick(wrong);
        s.pick(answer);
        assert_eq!(s.selected(), Some(wrong));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut s = session();
        s.pick(99);
        assert!(!s.revealed());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut s = session();
        s.previous();
        assert_eq!(s.current_index(), 0);
        s.jump_to(999);
        assert_eq!(s.current_index(), 4);
        s.next();
        assert_eq!(s.current_index(), 4);
    }

    #[test]
    fn reset_clears_score_and_credit() {
        let mut s = session();
        s.pick(s.current().answer);
        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);

        s.pick(s.current().answer);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn progress_counts_the_current_question() {
        let mut s = session();
        assert_eq!(s.progress_percent(), 20);
        s.jump_to(4);
        assert_eq!(s.progress_percent(), 100);
    }
}
