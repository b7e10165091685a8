// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for SOLFA
//!
//! These tests drive whole drills through the public API, the way the
//! embedding application would.

use std::collections::HashSet;

use solfa::theory::{
    follows_pattern, frequency_of, harmonic_field_of, interval_name, scale_of, second_note,
    INTERVAL_NAMES,
};
use solfa::{
    Category, ExerciseGenerator, Mode, NoteName, Prompt, QuizSession, SessionState, TableDrill,
    TableKind, TheoryError, QUESTIONS_PER_DRILL,
};

/// Answer every question of a drill, correctly or not, and return the summary
fn run_drill(category: Category, seed: u64, answer_correctly: bool) -> solfa::SessionSummary {
    let mut gen = ExerciseGenerator::with_seed(seed);
    let mut session = QuizSession::new(category).unwrap();
    session.begin(&mut gen);

    for _ in 0..QUESTIONS_PER_DRILL {
        let q = session.question().expect("active session has a question");
        let given = if answer_correctly {
            q.correct_answer().to_string()
        } else {
            q.options()
                .iter()
                .find(|o| o.as_str() != q.correct_answer())
                .expect("four options always include a wrong one")
                .clone()
        };
        let grade = session.answer(&given).expect("first answer is graded");
        assert_eq!(grade.correct, answer_correctly);
        session.advance(&mut gen);
    }

    assert_eq!(session.state(), SessionState::Graded);
    session.summary().unwrap()
}

#[test]
fn test_note_drill_all_correct_scores_fifty() {
    let summary = run_drill(Category::Notes, 21, true);
    assert_eq!(summary.total_score, 50);
    assert_eq!(summary.steps_completed, 5);
}

#[test]
fn test_note_drill_all_wrong_scores_zero() {
    let summary = run_drill(Category::Notes, 21, false);
    assert_eq!(summary.total_score, 0);
    assert_eq!(summary.steps_completed, 5);
}

#[test]
fn test_interval_drill_scoring() {
    assert_eq!(run_drill(Category::Intervals, 4, true).total_score, 100);
    assert_eq!(run_drill(Category::Intervals, 4, false).total_score, 0);
}

#[test]
fn test_canonical_scale_lookups() {
    use solfa::NoteName::*;
    assert_eq!(scale_of(C, Mode::Major).unwrap(), &[C, D, E, F, G, A, B]);
    assert_eq!(scale_of(G, Mode::Major).unwrap(), &[G, A, B, C, D, E, Fs]);
}

#[test]
fn test_canonical_interval_lookups() {
    assert_eq!(interval_name(7).unwrap(), "Perfect Fifth");
    assert_eq!(second_note(NoteName::C, 7).unwrap(), NoteName::G);
    assert!(matches!(interval_name(0), Err(TheoryError::OutOfRange(0))));
    assert!(matches!(interval_name(13), Err(TheoryError::OutOfRange(13))));
}

#[test]
fn test_every_table_row_survives_the_pattern_walk() {
    for mode in [Mode::Major, Mode::Minor] {
        for &root in mode.roots() {
            let degrees = scale_of(root, mode).unwrap();
            assert!(follows_pattern(degrees, mode), "{} {}", root, mode);

            let chords = harmonic_field_of(root, mode).unwrap();
            for i in 0..7 {
                assert_eq!(chords[i].root, degrees[i]);
            }
        }
    }
}

#[test]
fn test_option_sets_over_a_thousand_generations() {
    let mut gen = ExerciseGenerator::with_seed(1000);
    for i in 0..1000 {
        let q = if i % 2 == 0 {
            gen.note_question()
        } else {
            gen.interval_question()
        };
        let unique: HashSet<&String> = q.options().iter().collect();
        assert_eq!(q.options().len(), 4);
        assert_eq!(unique.len(), 4, "duplicate options at iteration {}", i);
        assert!(
            q.options().iter().any(|o| o == q.correct_answer()),
            "correct answer missing at iteration {}",
            i
        );
    }
}

#[test]
fn test_interval_prompts_are_consistent_with_their_answers() {
    let mut gen = ExerciseGenerator::with_seed(77);
    for _ in 0..200 {
        let q = gen.interval_question();
        if let Prompt::Interval {
            first,
            second,
            semitones,
        } = q.prompt()
        {
            assert_eq!(q.correct_answer(), INTERVAL_NAMES[semitones as usize - 1]);
            assert_eq!(second_note(first, semitones).unwrap(), second);
        } else {
            panic!("interval question carried a non-interval prompt");
        }
    }
}

#[test]
fn test_grading_is_idempotent_against_a_locked_answer() {
    let mut gen = ExerciseGenerator::with_seed(13);
    let mut session = QuizSession::new(Category::Intervals).unwrap();
    session.begin(&mut gen);

    let correct = session.question().unwrap().correct_answer().to_string();
    assert!(session.answer(&correct).unwrap().correct);
    let score = session.score();

    for _ in 0..5 {
        assert!(session.answer(&correct).is_none());
        assert!(session.answer("Tritone").is_none());
    }
    assert_eq!(session.score(), score);
}

#[test]
fn test_scale_table_drill_end_to_end() {
    let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
    assert_eq!(drill.verify().correct_count, 0);

    // Fill every editable cell from the canonical table
    for row in 0..drill.row_count() {
        let root = drill.root_of(row).unwrap();
        let degrees = scale_of(root, Mode::Major).unwrap();
        for (i, note) in degrees.iter().enumerate().skip(1) {
            // Lower-case entry exercises the case-insensitive grading
            let typed = note.to_string().to_lowercase();
            assert!(drill.set_cell(row, i, &typed).unwrap());
        }
    }

    let verdict = drill.verify();
    assert_eq!(verdict.correct_count, 72);
    assert!(verdict.complete);
    assert_eq!(verdict.score, 100);
}

#[test]
fn test_scale_table_drill_with_one_blank_cell() {
    let mut drill = TableDrill::new(TableKind::Harmony, Mode::Minor).unwrap();

    for row in 0..drill.row_count() {
        let root = drill.root_of(row).unwrap();
        let chords = harmonic_field_of(root, Mode::Minor).unwrap();
        for (i, chord) in chords.iter().enumerate().skip(1) {
            drill.set_cell(row, i, &chord.to_string()).unwrap();
        }
    }
    // Blank the last cell again
    drill.set_cell(11, 6, "").unwrap();

    let verdict = drill.verify();
    assert_eq!(verdict.correct_count, 71);
    assert!(!verdict.complete);
    assert_eq!(verdict.score, 0);

    // Prior correct cells are untouched by verify or later edits elsewhere
    assert_eq!(drill.feedback(0, 1), Some(true));
    drill.set_cell(5, 3, "wrong").unwrap();
    assert_eq!(drill.feedback(0, 1), Some(true));
}

#[test]
fn test_unknown_root_is_recoverable() {
    // The caller can fall back to a supported root after a failed lookup
    let err = scale_of(NoteName::Gb, Mode::Major).unwrap_err();
    assert_eq!(
        err,
        TheoryError::UnknownRoot {
            root: NoteName::Gb,
            mode: Mode::Major
        }
    );
    assert!(scale_of(NoteName::Fs, Mode::Major).is_ok());
}

#[test]
fn test_frequency_lookup_by_text() {
    assert_eq!(frequency_of("A").unwrap(), 440.0);
    assert_eq!(frequency_of("C#").unwrap(), frequency_of("Db").unwrap());
    assert!(matches!(
        frequency_of("A##"),
        Err(TheoryError::UnknownSpelling(_))
    ));
}
