//! Ratatui front end: Quest, Lab, Sheet, and Quiz tabs.
//!
//! The TUI is a thin event loop over the library sessions. All domain state
//! lives in [`LabSession`] and [`QuizSession`]; the app struct only holds
//! view-local cursors (active tab, focused entry field, coach step, quest
//! stage, sheet scroll), which reset on navigation rather than persisting.

pub mod widgets;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use miette::IntoDiagnostic;

use crate::account::Account;
use crate::lab::LabSession;
use crate::quiz::QuizSession;
use crate::sheet::{COACH_STEPS, QUEST_STAGES, ReviewSheet};

/// The four top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Quest,
    Lab,
    Sheet,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Quest, Tab::Lab, Tab::Sheet, Tab::Quiz];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Quest => "Quest",
            Tab::Lab => "Lab",
            Tab::Sheet => "Sheet",
            Tab::Quiz => "Quiz",
        }
    }

    fn next(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }

    fn previous(self) -> Tab {
        let i = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(i + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// TUI application state.
pub struct LabTui {
    tab: Tab,
    lab: LabSession,
    quiz: QuizSession,
    sheet: ReviewSheet,
    /// Focused entry field on the Lab tab, as an index into `Account::ALL`.
    focus: usize,
    /// Coach cursor, reset whenever the transaction changes.
    coach_step: usize,
    quest_stage: usize,
    sheet_scroll: u16,
    should_quit: bool,
}

impl LabTui {
    pub fn new(lab: LabSession, quiz: QuizSession, sheet: ReviewSheet) -> Self {
        Self {
            tab: Tab::Quest,
            lab,
            quiz,
            sheet,
            focus: 0,
            coach_step: 0,
            quest_stage: 0,
            sheet_scroll: 0,
            should_quit: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn lab(&self) -> &LabSession {
        &self.lab
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn sheet(&self) -> &ReviewSheet {
        &self.sheet
    }

    pub fn focused_account(&self) -> Account {
        Account::ALL[self.focus]
    }

    pub fn coach_step(&self) -> usize {
        self.coach_step
    }

    pub fn quest_stage(&self) -> usize {
        self.quest_stage
    }

    pub fn sheet_scroll(&self) -> u16 {
        self.sheet_scroll
    }

    /// Run the TUI event loop.
    pub fn run(&mut self) -> miette::Result<()> {
        let mut terminal = ratatui::init();

        loop {
            terminal
                .draw(|frame| widgets::render(frame, self))
                .into_diagnostic()?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100)).into_diagnostic()? {
                if let Event::Key(key) = event::read().into_diagnostic()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code, key.modifiers);
                }
            }
        }

        ratatui::restore();
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Global keys first.
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.tab = self.tab.next();
                return;
            }
            KeyCode::BackTab => {
                self.tab = self.tab.previous();
                return;
            }
            _ => {}
        }

        match self.tab {
            Tab::Quest => self.handle_quest_key(code),
            Tab::Lab => self.handle_lab_key(code),
            Tab::Sheet => self.handle_sheet_key(code),
            Tab::Quiz => self.handle_quiz_key(code),
        }
    }

    fn handle_quest_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right | KeyCode::Enter => {
                self.quest_stage = (self.quest_stage + 1).min(QUEST_STAGES.len() - 1);
            }
            KeyCode::Left => {
                self.quest_stage = self.quest_stage.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_lab_key(&mut self, code: KeyCode) {
        match code {
            // Entry editing: only digits and a sign are meaningful, which
            // frees the letter keys for commands.
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let account = self.focused_account();
                self.lab.form_mut().field_mut(account).push(c);
            }
            KeyCode::Backspace => {
                let account = self.focused_account();
                self.lab.form_mut().field_mut(account).pop();
            }
            KeyCode::Down => {
                self.focus = (self.focus + 1) % Account::ALL.len();
            }
            KeyCode::Up => {
                self.focus = (self.focus + Account::ALL.len() - 1) % Account::ALL.len();
            }
            KeyCode::Enter => {
                self.lab.submit();
            }
            KeyCode::Char('c') => {
                self.lab.check_only();
            }
            KeyCode::Right => {
                self.lab.next();
                self.on_lab_navigation();
            }
            KeyCode::Left => {
                self.lab.previous();
                self.on_lab_navigation();
            }
            KeyCode::Home => {
                self.lab.jump_to(0);
                self.on_lab_navigation();
            }
            KeyCode::End => {
                self.lab.jump_to(self.lab.bank().len() - 1);
                self.on_lab_navigation();
            }
            KeyCode::Char('x') => {
                self.lab.clear_entry();
                self.coach_step = 0;
            }
            KeyCode::Char('r') => {
                self.lab.reset_all();
                self.on_lab_navigation();
            }
            KeyCode::Char(']') => {
                self.coach_step = (self.coach_step + 1).min(COACH_STEPS.len() - 1);
            }
            KeyCode::Char('[') => {
                self.coach_step = self.coach_step.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Reset view-local cursors after the current transaction changed.
    fn on_lab_navigation(&mut self) {
        self.focus = 0;
        self.coach_step = 0;
    }

    fn handle_sheet_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Down => {
                self.sheet_scroll = self.sheet_scroll.saturating_add(1);
            }
            KeyCode::Up => {
                self.sheet_scroll = self.sheet_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.sheet_scroll = self.sheet_scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.sheet_scroll = self.sheet_scroll.saturating_sub(10);
            }
            KeyCode::Home => {
                self.sheet_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                self.quiz.pick(c as usize - '1' as usize);
            }
            KeyCode::Right | KeyCode::Enter => {
                self.quiz.next();
            }
            KeyCode::Left => {
                self.quiz.previous();
            }
            KeyCode::Char('r') => {
                self.quiz.reset();
            }
            _ => {}
        }
    }
}

/// Build the sessions and run the TUI.
pub fn launch() -> miette::Result<()> {
    let lab = LabSession::bundled()?;
    let quiz = QuizSession::bundled()?;
    let sheet = ReviewSheet::bundled()?;

    let mut tui = LabTui::new(lab, quiz, sheet);
    tui.run()
}
