use crate::constraints::{AbsenceConstraints, PositionConstraints, PresenceConstraints};

pub const WORD_LENGTH: usize = 5;

/// A single mark of the feedback string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Green (`g`): right letter, right position.
    Match,
    /// Yellow (`y`): the letter is in the word but not at this position.
    PartialMatch,
    /// Gray (`b`): the letter is not in the word.
    NoMatch,
}

impl Feedback {
    /// Parse one mark. Returns `None` for anything other than `g`, `y` or `b`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Match),
            'y' => Some(Self::PartialMatch),
            'b' => Some(Self::NoMatch),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Match => 'g',
            Self::PartialMatch => 'y',
            Self::NoMatch => 'b',
        }
    }
}

/// Returns `true` iff `word` satisfies every constraint.
///
/// Checks run in order (positions, then present letters, then absent
/// letters) and stop at the first failure. Inputs are expected to be
/// lowercase already.
#[must_use]
pub fn matches(
    word: &str,
    positions: &PositionConstraints,
    presence: &PresenceConstraints,
    absence: &AbsenceConstraints,
) -> bool {
    let letters: Vec<char> = word.chars().collect();

    for (i, slot) in positions.iter().enumerate() {
        if let Some(expected) = slot
            && letters.get(i) != Some(expected)
        {
            return false;
        }
    }

    for (letter, wrong_positions) in presence {
        if !letters.contains(letter) {
            return false;
        }
        if wrong_positions
            .iter()
            .any(|&pos| letters.get(pos) == Some(letter))
        {
            return false;
        }
    }

    !absence.iter().any(|letter| letters.contains(letter))
}

/// Keep the words of `word_list` accepted by [`matches`], in their original order.
pub fn filter_candidates(
    word_list: &[String],
    positions: &PositionConstraints,
    presence: &PresenceConstraints,
    absence: &AbsenceConstraints,
) -> Vec<String> {
    word_list
        .iter()
        .filter(|word| matches(word, positions, presence, absence))
        .cloned()
        .collect()
}
