// Integration tests for the wordle-helper application
// These tests verify that all modules work together correctly

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Cursor;
use wordle_helper::cli::CliInterface;
use wordle_helper::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_end_to_end_cli_workflow() {
    // Load both lists from disk, pick English, play two guesses and quit
    let dir = tempfile::tempdir().unwrap();
    let english = dir.path().join("en-wordle-list.txt");
    let indonesian = dir.path().join("00-indonesian-wordlist.txt");
    fs::write(&english, "crane\ntrace\ngrace\nslate\nbrace\n").unwrap();
    fs::write(&indonesian, "rumah\nkucing\nmakan\n").unwrap();

    let paths = WordListPaths::resolve(Some(english.as_path()), Some(indonesian.as_path()));
    let lists = WordLists::load(&paths).unwrap();
    let mut session = Session::new(Language::English, lists.get(Language::English));

    let input = "crane\nyggbg\ntrace\nbggyg\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut session, &mut interface);

    // crane: c misplaced, r/a/e placed; trace: c misplaced at 3, t absent
    let constraints = session.constraints();
    assert_eq!(constraints.positions, [None, Some('r'), Some('a'), None, Some('e')]);
    assert_eq!(constraints.presence.get(&'c'), Some(&BTreeSet::from([0, 3])));
    assert_eq!(constraints.absence, BTreeSet::from(['n', 't']));
    assert!(constraints.filter(session.word_list()).is_empty());
}

#[test]
fn test_apple_scenario() {
    let list = words(&["apple", "allow", "alloy", "amble"]);
    let mut session = Session::new(Language::English, &list);
    let report = session.submit_guess("apple", "gybbb");

    // Every word either contains l/e or lacks p
    assert!(report.matches.is_empty());

    let state = &report.constraints;
    assert!(state.is_satisfied_by("adopt"));
    assert!(!state.is_satisfied_by("aphid"));
    assert!(!state.is_satisfied_by("apple"));
}

#[test]
fn test_confirmed_and_absent_in_same_guess() {
    let list = words(&["awash", "train", "tiara", "shake"]);
    let mut session = Session::new(Language::English, &list);
    let report = session.submit_guess("tiara", "bbgbb");

    assert!(!report.constraints.absence.contains(&'a'));
    assert_eq!(report.matches, words(&["awash", "shake"]));
}

#[test]
fn test_free_function_contract_matches_state_methods() {
    let list = words(&["adopt", "apple", "abbot", "aphid", "atoll", "amber"]);
    let state = ConstraintState::new().with_guess("apple", "gybbb");

    let via_state = state.filter(&list);
    let via_fn = filter_candidates(&list, &state.positions, &state.presence, &state.absence);
    assert_eq!(via_state, via_fn);

    for word in &list {
        assert_eq!(
            state.is_satisfied_by(word),
            matches(word, &state.positions, &state.presence, &state.absence)
        );
    }
}

#[test]
fn test_filtering_is_idempotent_across_guesses() {
    let list = words(&[
        "crane", "trace", "grace", "brace", "slate", "place", "space", "react", "cater",
    ]);
    let state = ConstraintState::new()
        .with_guess("slate", "bbgbg")
        .with_guess("crane", "bggbg");
    let once = state.filter(&list);
    assert_eq!(state.filter(&once), once);
}

#[test]
fn test_each_new_constraint_narrows() {
    let list = words(&[
        "crane", "trace", "grace", "brace", "slate", "place", "space", "react", "cater", "caret",
    ]);
    let mut positions: PositionConstraints = [None; WORD_LENGTH];
    let mut presence: PresenceConstraints = BTreeMap::new();
    let mut absence: AbsenceConstraints = BTreeSet::new();
    let mut previous = filter_candidates(&list, &positions, &presence, &absence).len();

    positions[4] = Some('e');
    let after_position = filter_candidates(&list, &positions, &presence, &absence).len();
    assert!(after_position <= previous);
    previous = after_position;

    presence.entry('c').or_default().insert(0);
    let after_presence = filter_candidates(&list, &positions, &presence, &absence).len();
    assert!(after_presence <= previous);
    previous = after_presence;

    absence.insert('s');
    let after_absence = filter_candidates(&list, &positions, &presence, &absence).len();
    assert!(after_absence <= previous);
    assert_eq!(
        filter_candidates(&list, &positions, &presence, &absence),
        words(&["trace", "grace", "brace", "place"])
    );
}

#[test]
fn test_empty_word_list() {
    let list: Vec<String> = Vec::new();
    let mut session = Session::new(Language::Indonesian, &list);
    assert!(session.submit_guess("rumah", "gyb").matches.is_empty());
    assert!(session.submit_guess("", "").matches.is_empty());
}

#[test]
fn test_win_resets_between_games() {
    let list = words(&["crane", "slate"]);
    let mut session = Session::new(Language::English, &list);

    let input = "crane\nggggg\nwin\nslate\nggggg\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut session, &mut interface);

    // Only the second game's guess is left
    assert_eq!(
        session.constraints().positions,
        [Some('s'), Some('l'), Some('a'), Some('t'), Some('e')]
    );
}

#[test]
fn test_indonesian_list_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("id.txt");
    fs::write(&path, "Rumah\n  kucing\nMAKAN  \nbuku\n\n").unwrap();

    let list = load_wordbank_from_file(&path, Language::Indonesian).unwrap();
    assert_eq!(list, words(&["rumah", "makan"]));

    let mut session = Session::new(Language::Indonesian, &list);
    let report = session.submit_guess("MAKAN", "yybgb");
    assert_eq!(report.matches, words(&["rumah"]));
}

#[test]
fn test_missing_word_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let english = dir.path().join("en.txt");
    fs::write(&english, "crane\n").unwrap();
    let paths = WordListPaths {
        english,
        indonesian: dir.path().join("missing.txt"),
    };

    let err = WordLists::load(&paths).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_feedback_wire_format_round_trip() {
    let marks: Vec<Feedback> = "gyb".chars().filter_map(Feedback::from_char).collect();
    assert_eq!(
        marks,
        vec![Feedback::Match, Feedback::PartialMatch, Feedback::NoMatch]
    );
    let encoded: String = marks.iter().map(|m| m.to_char()).collect();
    assert_eq!(encoded, "gyb");
}

#[test]
fn test_handle_guess_outcomes() {
    let list = words(&["crane"]);
    let mut session = Session::new(Language::English, &list);
    assert!(matches!(
        session.handle_guess("crane", "ggggg"),
        GuessOutcome::Filtered(report) if report.matches.len() == 1
    ));
    assert_eq!(session.handle_guess("win", ""), GuessOutcome::Solved);
    assert_eq!(session.handle_guess("exit", ""), GuessOutcome::Quit);
}
