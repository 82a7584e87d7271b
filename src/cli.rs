use crate::game_state::{GameInterface, UserAction, format_report};
use crate::session::{FilterReport, GuessCommand};
use crate::wordbank::Language;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

// Not a valid guess, so it cannot shadow a real word like "reset"
const RESET_COMMAND: &str = ":reset";

/// Wordle Helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about = "Filter a word list by Wordle feedback", long_about = None)]
pub struct Cli {
    /// Path to the English word list (one word per line)
    #[arg(long = "english", value_name = "PATH")]
    pub english_path: Option<PathBuf>,

    /// Path to the Indonesian word list (one word per line)
    #[arg(long = "indonesian", value_name = "PATH")]
    pub indonesian_path: Option<PathBuf>,

    /// Word list to play with; prompts when omitted
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Use the terminal UI instead of line prompts
    #[arg(long)]
    pub tui: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read one line, trimmed. `None` on end of input or a read error.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Ask which word list to use. End of input picks Indonesian, like any answer other than `en`.
pub fn prompt_language<R: BufRead>(reader: &mut R) -> Language {
    println!("Choose language (en for English, id for Indonesian):");
    let choice = read_trimmed_line(reader).unwrap_or_default();
    Language::from_choice(&choice)
}

pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nWord (or 'exit' to quit, 'win' when solved, ':reset' to start over):");
    let Some(word) = read_trimmed_line(reader) else {
        return UserAction::Exit;
    };

    if word.eq_ignore_ascii_case(RESET_COMMAND) {
        return UserAction::Reset;
    }
    if !matches!(GuessCommand::parse(&word), GuessCommand::Guess(_)) {
        // Sentinels need no feedback
        return UserAction::Submit {
            word,
            feedback: String::new(),
        };
    }

    println!("Match (g=green, y=yellow, b=gray, e.g. gybbb):");
    let Some(feedback) = read_trimmed_line(reader) else {
        return UserAction::Exit;
    };
    UserAction::Submit { word, feedback }
}

pub fn display_session_start(language: Language, word_count: usize) {
    println!("{language} mode selected. Loaded {word_count} words.");
}

pub fn display_report(report: &FilterReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

pub fn display_reset_message() {
    println!("Constraints cleared.");
}

pub fn display_solved_message() {
    println!("Solved! Constraints cleared for a new game.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait, reading from any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_session_start(&mut self, language: Language, word_count: usize) {
        display_session_start(language, word_count);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_report(&mut self, report: &FilterReport) {
        display_report(report);
    }

    fn display_reset_message(&mut self) {
        display_reset_message();
    }

    fn display_solved_message(&mut self) {
        display_solved_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
