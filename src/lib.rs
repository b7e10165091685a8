// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SOLFA - music theory drill engine.
//!
//! A synchronous, I/O-free rules engine for music theory training apps:
//! canonical tables of scales and harmonic fields, note naming and
//! frequencies, interval arithmetic, and a generator/validator that turns
//! the tables into randomized, gradeable drills.
//!
//! The crate deliberately stops at the data boundary. Prompt wording,
//! staff rendering, audio playback, and persistence are the embedding
//! application's job; the engine hands it structured questions, grades
//! answers, and reports a final score.

pub mod drill;
pub mod theory;

pub use drill::generator::ExerciseGenerator;
pub use drill::session::{QuizSession, SessionState, QUESTIONS_PER_DRILL};
pub use drill::table::{TableDrill, TableKind, TableVerdict};
pub use drill::{Category, DrillError, GradeResult, Prompt, Question, SessionSummary};
pub use theory::{Chord, ChordQuality, Mode, NoteName, TheoryError};
