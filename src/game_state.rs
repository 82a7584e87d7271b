use crate::info_log;
use crate::session::{FilterReport, GuessOutcome, Session};
use crate::wordbank::Language;

/// Input gathered by an interface for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit { word: String, feedback: String },
    Reset,
    Exit,
}

/// Front end driven by [`game_loop`].
pub trait GameInterface {
    fn display_session_start(&mut self, language: Language, word_count: usize);
    /// Block until the user does something. `None` means nothing actionable; ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_report(&mut self, report: &FilterReport);
    fn display_reset_message(&mut self);
    fn display_solved_message(&mut self);
    fn display_exit_message(&mut self);
}

/// Text shown for a report: the matches (all of them) followed by the constraint snapshot.
#[must_use]
pub fn format_report(report: &FilterReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.matches.len() + 5);
    if report.matches.is_empty() {
        lines.push("No matching words found.".to_string());
    } else {
        lines.push("Matching words:".to_string());
        lines.extend(report.matches.iter().cloned());
    }
    lines.push(String::new());
    lines.extend(report.constraints.to_string().lines().map(str::to_string));
    lines
}

pub fn game_loop<I: GameInterface + ?Sized>(session: &mut Session<'_>, interface: &mut I) {
    interface.display_session_start(session.language(), session.word_list().len());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        info_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Reset => {
                session.reset();
                interface.display_reset_message();
            }
            UserAction::Submit { word, feedback } => {
                match session.handle_guess(&word, &feedback) {
                    GuessOutcome::Quit => {
                        interface.display_exit_message();
                        break;
                    }
                    GuessOutcome::Solved => interface.display_solved_message(),
                    GuessOutcome::Filtered(report) => interface.display_report(&report),
                }
            }
        }
    }
}
