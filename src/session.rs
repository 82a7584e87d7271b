use crate::constraints::ConstraintState;
use crate::wordbank::Language;
use crate::{debug_log, info_log};

/// Guess meaning "give up and quit".
pub const QUIT_SENTINEL: &str = "exit";
/// Guess meaning "solved it, start fresh".
pub const SOLVED_SENTINEL: &str = "win";

/// What the user typed in the word field.
#[derive(Debug, PartialEq, Eq)]
pub enum GuessCommand {
    Quit,
    Solved,
    Guess(String),
}

impl GuessCommand {
    #[must_use]
    pub fn parse(raw_word: &str) -> Self {
        let word = raw_word.trim().to_lowercase();
        match word.as_str() {
            QUIT_SENTINEL => Self::Quit,
            SOLVED_SENTINEL => Self::Solved,
            _ => Self::Guess(word),
        }
    }
}

/// Result of a submitted guess: every matching word and the constraints that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterReport {
    pub matches: Vec<String>,
    pub constraints: ConstraintState,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Quit,
    Solved,
    Filtered(FilterReport),
}

/// One game against one word list.
pub struct Session<'a> {
    language: Language,
    word_list: &'a [String],
    state: ConstraintState,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(language: Language, word_list: &'a [String]) -> Self {
        info_log!(
            "Session started: {} mode, {} words",
            language,
            word_list.len()
        );
        Self {
            language,
            word_list,
            state: ConstraintState::new(),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn word_list(&self) -> &'a [String] {
        self.word_list
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintState {
        &self.state
    }

    /// Record a guess and return every word still possible.
    pub fn submit_guess(&mut self, raw_word: &str, raw_feedback: &str) -> FilterReport {
        let word = raw_word.trim().to_lowercase();
        let feedback = raw_feedback.trim().to_lowercase();
        self.state.apply_guess(&word, &feedback);
        let matches = self.state.filter(self.word_list);
        debug_log!(
            "submit_guess('{}', '{}') -> {} matches",
            word,
            feedback,
            matches.len()
        );
        FilterReport {
            matches,
            constraints: self.state.clone(),
        }
    }

    /// Like [`Self::submit_guess`], but honours the `exit` and `win` sentinels first.
    pub fn handle_guess(&mut self, raw_word: &str, raw_feedback: &str) -> GuessOutcome {
        match GuessCommand::parse(raw_word) {
            GuessCommand::Quit => GuessOutcome::Quit,
            GuessCommand::Solved => {
                self.reset();
                GuessOutcome::Solved
            }
            GuessCommand::Guess(word) => GuessOutcome::Filtered(self.submit_guess(&word, raw_feedback)),
        }
    }

    pub fn reset(&mut self) {
        info_log!("Session reset");
        self.state.reset();
    }
}
