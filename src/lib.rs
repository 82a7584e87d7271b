// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod solver;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use constraints::{AbsenceConstraints, ConstraintState, PositionConstraints, PresenceConstraints};
pub use error::{Error, Result};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use session::{FilterReport, GuessOutcome, Session};
pub use solver::{Feedback, WORD_LENGTH, filter_candidates, matches};
pub use wordbank::{Language, WordListPaths, WordLists, load_wordbank_from_file, load_wordbank_from_str};
