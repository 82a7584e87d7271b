//! TUI (Terminal User Interface) module for Wordle Helper
//!
//! A single form: a Word field, a Match field and the result list below them.
//!
//! # Keys
//! - Letters type into the focused field, `Tab` switches fields
//! - `Enter` submits (from the Word field it first moves to Match, unless the
//!   word is `exit` or `win`)
//! - `Ctrl+R` or `Shift+Enter` resets, `Esc` quits
//! - `Up`/`Down`/`PageUp`/`PageDown` scroll the results

use crate::error::Result;
use crate::game_state::{GameInterface, UserAction, format_report};
use crate::session::{FilterReport, GuessCommand};
use crate::solver::WORD_LENGTH;
use crate::wordbank::Language;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const PAGE_SCROLL: u16 = 10;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const FOCUSED_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const IDLE_STYLE: Style = Style::new().fg(Color::Gray);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Word,
    Match,
}

/// Everything on screen except the terminal itself.
#[derive(Debug)]
struct FormState {
    word_input: String,
    match_input: String,
    focus: Field,
    report_lines: Vec<String>,
    scroll: u16,
    status: String,
    error_message: String,
}

impl FormState {
    fn new() -> Self {
        Self {
            word_input: String::new(),
            match_input: String::new(),
            focus: Field::Word,
            report_lines: Vec::new(),
            scroll: 0,
            status: "Ready".to_string(),
            error_message: String::new(),
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Word => &mut self.word_input,
            Field::Match => &mut self.match_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Word => Field::Match,
            Field::Match => Field::Word,
        };
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.report_lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX).min(self.max_scroll());
    }

    fn clear_inputs(&mut self) {
        self.word_input.clear();
        self.match_input.clear();
        self.focus = Field::Word;
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.error_message.clear();

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_key() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UserAction::Reset)
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(UserAction::Reset)
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                None
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                None
            }
            KeyCode::Up => {
                self.scroll_by(-1);
                None
            }
            KeyCode::Down => {
                self.scroll_by(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_by(-i32::from(PAGE_SCROLL));
                None
            }
            KeyCode::PageDown => {
                self.scroll_by(i32::from(PAGE_SCROLL));
                None
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_key() - Ignoring input with modifier: {:?}", key.modifiers);
                None
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                let input = self.focused_input();
                if input.chars().count() < WORD_LENGTH {
                    input.extend(c.to_lowercase());
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => {
                debug_log!("handle_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_enter(&mut self) -> Option<UserAction> {
        let is_sentinel = !matches!(
            GuessCommand::parse(&self.word_input),
            GuessCommand::Guess(_)
        );
        if self.focus == Field::Word && !is_sentinel && self.match_input.is_empty() {
            self.focus = Field::Match;
            return None;
        }
        let action = UserAction::Submit {
            word: self.word_input.clone(),
            feedback: if is_sentinel {
                String::new()
            } else {
                self.match_input.clone()
            },
        };
        self.clear_inputs();
        Some(action)
    }
}

/// Main TUI interface component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    form: FormState,
}

impl TuiInterface {
    pub fn new() -> Result<Self> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            form: FormState::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let form = &self.form;
        self.terminal.draw(|f| render(f, form))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn next_event(&mut self) -> Result<Option<UserAction>> {
        match event::read()? {
            Event::Key(key) => Ok(self.form.handle_key(key)),
            other => {
                debug_log!("next_event() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

fn render(f: &mut Frame, form: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Inputs
            Constraint::Min(5),    // Results
            Constraint::Length(3), // Status
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    let title = Paragraph::new("WORDLE HELPER")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_inputs(f, chunks[1], form);
    render_results(f, chunks[2], form);

    let status = Paragraph::new(form.status.as_str())
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let instructions = Paragraph::new(
        "ENTER: Submit | TAB: Switch field | CTRL+R: Reset | UP/DOWN: Scroll | ESC: Quit",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(instructions, chunks[4]);
}

fn render_inputs(f: &mut Frame, area: Rect, form: &FormState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (field, title, value, rect) in [
        (Field::Word, "Word", &form.word_input, halves[0]),
        (Field::Match, "Match (g/y/b)", &form.match_input, halves[1]),
    ] {
        let style = if form.focus == field {
            FOCUSED_STYLE
        } else {
            IDLE_STYLE
        };
        let paragraph = Paragraph::new(value.as_str()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(style),
        );
        f.render_widget(paragraph, rect);
    }
}

fn render_results(f: &mut Frame, area: Rect, form: &FormState) {
    let mut lines: Vec<Line> = Vec::new();
    if !form.error_message.is_empty() {
        lines.push(Line::from(Span::styled(
            form.error_message.as_str(),
            ERROR_STYLE,
        )));
    }
    for (i, text) in form.report_lines.iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(Span::styled(text.as_str(), INFO_STYLE)));
        } else {
            lines.push(Line::from(text.as_str()));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Results").borders(Borders::ALL))
        .scroll((form.scroll, 0));
    f.render_widget(paragraph, area);
}

impl GameInterface for TuiInterface {
    fn display_session_start(&mut self, language: Language, word_count: usize) {
        self.form.status = format!("{language} mode selected. Loaded {word_count} words.");
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_event() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_report(&mut self, report: &FilterReport) {
        self.form.report_lines = format_report(report);
        self.form.scroll = 0;
        self.form.status = format!("{} matching words", report.matches.len());
        self.draw_or_log();
    }

    fn display_reset_message(&mut self) {
        self.form.clear_inputs();
        self.form.report_lines.clear();
        self.form.scroll = 0;
        self.form.status = "Constraints cleared.".to_string();
        self.draw_or_log();
    }

    fn display_solved_message(&mut self) {
        self.form.report_lines.clear();
        self.form.scroll = 0;
        self.form.status = "Solved! Constraints cleared for a new game.".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.form.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
