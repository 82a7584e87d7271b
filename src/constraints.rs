//! Accumulated knowledge about the answer.
//!
//! A [`ConstraintState`] starts empty and grows with each guess. It is only
//! cleared by an explicit [`ConstraintState::reset`].

use crate::solver::{self, Feedback, WORD_LENGTH};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Confirmed letter for each position, if known.
pub type PositionConstraints = [Option<char>; WORD_LENGTH];

/// Letters known to be in the word, with the positions they are known not to occupy.
pub type PresenceConstraints = BTreeMap<char, BTreeSet<usize>>;

/// Letters known not to be in the word.
pub type AbsenceConstraints = BTreeSet<char>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintState {
    pub positions: PositionConstraints,
    pub presence: PresenceConstraints,
    pub absence: AbsenceConstraints,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none)
            && self.presence.is_empty()
            && self.absence.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one guess and its `g`/`y`/`b` feedback string into the state.
    ///
    /// Unknown marks, missing marks and positions past the fifth letter are
    /// skipped. A confirmed position keeps its first letter. Green and yellow
    /// marks are recorded before gray ones, so a letter that is green or yellow
    /// anywhere in this guess (or was in an earlier one) is never marked absent.
    /// Earlier absences are not revisited.
    pub fn apply_guess(&mut self, guess: &str, feedback: &str) {
        let marks: Vec<(usize, char, Feedback)> = guess
            .chars()
            .zip(feedback.chars())
            .enumerate()
            .take(WORD_LENGTH)
            .filter_map(|(i, (letter, mark))| Feedback::from_char(mark).map(|f| (i, letter, f)))
            .collect();

        for &(i, letter, mark) in &marks {
            match mark {
                Feedback::Match => {
                    // First confirmation of a slot wins
                    if self.positions[i].is_none() {
                        self.positions[i] = Some(letter);
                    }
                }
                Feedback::PartialMatch => {
                    self.presence.entry(letter).or_default().insert(i);
                }
                Feedback::NoMatch => {}
            }
        }

        for &(_, letter, mark) in &marks {
            if mark == Feedback::NoMatch
                && !self.positions.contains(&Some(letter))
                && !self.presence.contains_key(&letter)
            {
                self.absence.insert(letter);
            }
        }
    }

    /// Builder form of [`Self::apply_guess`].
    #[must_use]
    pub fn with_guess(mut self, guess: &str, feedback: &str) -> Self {
        self.apply_guess(guess, feedback);
        self
    }

    #[must_use]
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        solver::matches(word, &self.positions, &self.presence, &self.absence)
    }

    #[must_use]
    pub fn filter(&self, word_list: &[String]) -> Vec<String> {
        solver::filter_candidates(word_list, &self.positions, &self.presence, &self.absence)
    }

    /// The "Correct:" line, e.g. `a _ _ _ _`.
    #[must_use]
    pub fn describe_positions(&self) -> String {
        self.positions
            .iter()
            .map(|slot| slot.map_or_else(|| "_".to_string(), |c| c.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The "Yellow:" line, e.g. `p (not 2), r (not 1, 4)`. Positions are one-based.
    #[must_use]
    pub fn describe_presence(&self) -> String {
        if self.presence.is_empty() {
            return "-".to_string();
        }
        self.presence
            .iter()
            .map(|(letter, wrong)| {
                let positions: Vec<String> = wrong.iter().map(|p| (p + 1).to_string()).collect();
                format!("{letter} (not {})", positions.join(", "))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The "Wrong:" line, e.g. `e, l`.
    #[must_use]
    pub fn describe_absence(&self) -> String {
        if self.absence.is_empty() {
            return "-".to_string();
        }
        self.absence
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {}", self.describe_positions())?;
        writeln!(f, "Yellow: {}", self.describe_presence())?;
        write!(f, "Wrong: {}", self.describe_absence())
    }
}
