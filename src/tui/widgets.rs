//! TUI widget rendering: header tabs, per-tab bodies, status bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap};

use crate::account::{Account, Classification};
use crate::equation::evaluate;
use crate::money::format_money;
use crate::sheet::{COACH_STEPS, PATTERNS, QUEST_STAGES};

use super::{LabTui, Tab};

/// Main TUI layout rendering.
pub fn render(frame: &mut Frame, app: &LabTui) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);

    match app.tab() {
        Tab::Quest => render_quest(frame, app, body_area),
        Tab::Lab => render_lab(frame, app, body_area),
        Tab::Sheet => render_sheet(frame, app, body_area),
        Tab::Quiz => render_quiz(frame, app, body_area),
    }

    render_status(frame, app, status_area);
}

fn render_header(frame: &mut Frame, app: &LabTui, area: Rect) {
    let selected = Tab::ALL.iter().position(|t| *t == app.tab()).unwrap_or(0);
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    frame.render_widget(tabs, area);
}

fn render_status(frame: &mut Frame, app: &LabTui, area: Rect) {
    let summary = evaluate(app.lab().ledger());
    let (verdict, color) = if summary.balanced {
        ("balanced", Color::Green)
    } else {
        ("NOT balanced", Color::Red)
    };

    let hint = match app.tab() {
        Tab::Quest => "Left/Right: stage | Tab: switch tab | Esc: quit",
        Tab::Lab => {
            "Up/Down: field | Enter: check & apply | c: check only | Left/Right: txn | \
             x: clear | r: reset | [/]: coach | Esc: quit"
        }
        Tab::Sheet => "Up/Down: scroll | Tab: switch tab | Esc: quit",
        Tab::Quiz => "1-4: pick | Left/Right: question | r: reset | Esc: quit",
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" A = L + E: {verdict} "),
            Style::default().fg(color),
        ),
        Span::raw("| "),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(status, area);
}

// ── Quest tab ───────────────────────────────────────────────────────────

fn render_quest(frame: &mut Frame, app: &LabTui, area: Rect) {
    let stage = QUEST_STAGES[app.quest_stage().min(QUEST_STAGES.len() - 1)];

    let mut lines = vec![
        Line::from(Span::styled(
            stage.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(stage.body),
        Line::raw(""),
    ];
    for (i, s) in QUEST_STAGES.iter().enumerate() {
        let marker = if i < app.quest_stage() {
            Span::styled("[done] ", Style::default().fg(Color::Green))
        } else if i == app.quest_stage() {
            Span::styled("[now]  ", Style::default().fg(Color::Cyan))
        } else {
            Span::styled("[next] ", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![marker, Span::raw(s.title)]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Goal: master transaction analysis. If you can solve T1-T11 correctly, \
         you are ready.",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " Quest ({}/{}) ",
                    app.quest_stage() + 1,
                    QUEST_STAGES.len()
                )),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

// ── Lab tab ─────────────────────────────────────────────────────────────

fn render_lab(frame: &mut Frame, app: &LabTui, area: Rect) {
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)]).areas(area);

    let [scoreboard_area, story_area, feedback_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .areas(left_area);

    let [form_area, coach_area] =
        Layout::vertical([Constraint::Length(14), Constraint::Fill(1)]).areas(right_area);

    render_scoreboard(frame, app, scoreboard_area);
    render_story(frame, app, story_area);
    render_feedback(frame, app, feedback_area);
    render_entry_form(frame, app, form_area);
    render_coach(frame, app, coach_area);
}

fn stat_line(label: &str, value: i64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(Color::DarkGray)),
        Span::raw(format_money(value)),
    ])
}

fn render_scoreboard(frame: &mut Frame, app: &LabTui, area: Rect) {
    let ledger = app.lab().ledger();
    let summary = evaluate(ledger);

    let block = Block::default().borders(Borders::ALL).title(Line::from(vec![
        Span::raw(" Equation Scoreboard "),
        if summary.balanced {
            Span::styled("[Balanced] ", Style::default().fg(Color::Green))
        } else {
            Span::styled("[Not balanced] ", Style::default().fg(Color::Red))
        },
    ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [assets_area, liabilities_area, equity_area] = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .areas(inner);

    let mut assets = vec![
        Line::from(Span::styled(
            format!("ASSETS {}", format_money(summary.assets)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let mut liabilities = vec![
        Line::from(Span::styled(
            format!("LIABILITIES {}", format_money(summary.liabilities)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let mut equity = vec![
        Line::from(Span::styled(
            format!("EQUITY {}", format_money(summary.equity)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for account in Account::ALL {
        let line = stat_line(account.label(), ledger.get(account));
        match account.classification() {
            Classification::Asset => assets.push(line),
            Classification::Liability => liabilities.push(line),
            Classification::Equity => equity.push(line),
        }
    }

    frame.render_widget(Paragraph::new(assets), assets_area);
    frame.render_widget(Paragraph::new(liabilities), liabilities_area);
    frame.render_widget(Paragraph::new(equity), equity_area);
}

fn render_story(frame: &mut Frame, app: &LabTui, area: Rect) {
    let txn = app.lab().current();
    let bank = app.lab().bank();

    // Transaction map: ids with the current one highlighted.
    let mut map_spans: Vec<Span> = Vec::with_capacity(bank.len() * 2);
    for (i, t) in bank.all().iter().enumerate() {
        let style = if i == app.lab().current_index() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        map_spans.push(Span::styled(format!(" {} ", t.id), style));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                txn.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (amount: {})", format_money(txn.amount)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::raw(txn.story.clone()),
        Line::raw(""),
        Line::from(map_spans),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Transaction {} / {} — {}% ",
            txn.id,
            bank.len(),
            app.lab().progress_percent()
        )))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, app: &LabTui, area: Rect) {
    let txn = app.lab().current();

    let mut lines: Vec<Line> = Vec::new();
    match app.lab().last_check() {
        None => {
            lines.push(Line::from(Span::styled(
                "Enter the per-account changes for this transaction, then press \
                 Enter to check & apply.",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("Hint: {}", txn.hint),
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(report) if report.ok => {
            lines.push(Line::from(Span::styled(
                "Correct! You can move to the next transaction (Right arrow).",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        Some(report) => {
            lines.push(Line::from(Span::styled(
                "Not quite. Fix these accounts:",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            let badges: Vec<Span> = report
                .mismatches
                .iter()
                .map(|a| {
                    Span::styled(
                        format!(" {} ", a.label()),
                        Style::default().fg(Color::White).bg(Color::Red),
                    )
                })
                .collect();
            lines.push(Line::from(badges));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("Hint: {}", txn.hint),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "If you're stuck, here's the pattern:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for pattern in PATTERNS {
                lines.push(Line::from(Span::styled(
                    format!("  - {pattern}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn render_entry_form(frame: &mut Frame, app: &LabTui, area: Rect) {
    let form = app.lab().form();
    let mismatched: &[Account] = app
        .lab()
        .last_check()
        .map(|r| r.mismatches.as_slice())
        .unwrap_or(&[]);

    let mut lines: Vec<Line> = Vec::with_capacity(Account::ALL.len() + 1);
    for account in Account::ALL {
        let focused = account == app.focused_account();
        let marker = if focused { "> " } else { "  " };
        let text = form.get(account);
        let display = if text.is_empty() { "0" } else { text };

        let label_style = if mismatched.contains(&account) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<22}", account.label()), label_style),
            Span::styled(
                display.to_string(),
                if focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Use negative for decrease (e.g. -1000).",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Enter the changes "));
    frame.render_widget(widget, area);
}

fn render_coach(frame: &mut Frame, app: &LabTui, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, step) in COACH_STEPS.iter().enumerate() {
        let (marker, style) = if i < app.coach_step() {
            ("[done] ", Style::default().fg(Color::Green))
        } else if i == app.coach_step() {
            ("[now]  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            ("[next] ", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(step.title, style),
        ]));
        if i == app.coach_step() {
            lines.push(Line::from(Span::styled(
                format!("       {}", step.body),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Step-by-step Coach "))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

// ── Sheet tab ───────────────────────────────────────────────────────────

fn render_sheet(frame: &mut Frame, app: &LabTui, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for section in app.sheet().sections() {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for bullet in &section.bullets {
            lines.push(Line::raw(format!("  - {bullet}")));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "Transaction patterns (memorize)",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for pattern in PATTERNS {
        lines.push(Line::raw(format!("  - {pattern}")));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Quick Sheet "))
        .wrap(Wrap { trim: false })
        .scroll((app.sheet_scroll(), 0));
    frame.render_widget(widget, area);
}

// ── Quiz tab ────────────────────────────────────────────────────────────

fn render_quiz(frame: &mut Frame, app: &LabTui, area: Rect) {
    let quiz = app.quiz();
    let item = quiz.current();

    let [progress_area, question_area, score_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let gauge = Gauge::default()
        .ratio(f64::from(quiz.progress_percent()) / 100.0)
        .label(format!(
            "{} / {}",
            quiz.current_index() + 1,
            quiz.bank().len()
        ))
        .gauge_style(Style::default().fg(Color::Cyan));
    frame.render_widget(gauge, progress_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                item.question.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", item.topic),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::raw(""),
    ];

    for (i, option) in item.options.iter().enumerate() {
        let style = if quiz.revealed() {
            if i == item.answer {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if Some(i) == quiz.selected() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {}. {option}", i + 1),
            style,
        )));
    }

    if quiz.revealed() {
        lines.push(Line::raw(""));
        let verdict = if quiz.selected() == Some(item.answer) {
            Span::styled("Correct!", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                format!("Answer: {}", item.options[item.answer]),
                Style::default().fg(Color::Red),
            )
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(Span::styled(
            item.explanation.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let question = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Practice Questions "))
        .wrap(Wrap { trim: false });
    frame.render_widget(question, question_area);

    let score = Paragraph::new(Line::from(vec![
        Span::raw("Correct answers: "),
        Span::styled(
            format!("{} / {}", quiz.score(), quiz.bank().len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(score, score_area);
}
