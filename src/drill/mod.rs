// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Exercise generation and grading.
//!
//! Questions are plain value objects: the generator builds them from the
//! theory tables, the session grades answers against them, and they are
//! discarded once graded. Prompt wording, audio, and rendering belong to
//! the caller; the engine supplies only the structured answer and options.

pub mod generator;
pub mod session;
pub mod table;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theory::{NoteName, TheoryError};

/// Exercise categories offered by the drill engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Identify a single note (multiple choice)
    Notes,
    /// Name the interval between two notes (multiple choice)
    Intervals,
    /// Fill in the scale table (full-table drill)
    Scales,
    /// Fill in the harmonic field table (full-table drill)
    Harmony,
    /// Routing alias for the combined scale-table exercise
    ScaleTable,
}

impl Category {
    /// Points awarded per correct multiple-choice answer
    ///
    /// Table categories score 100 on completion instead and award nothing
    /// per answer.
    pub fn points_per_question(self) -> u32 {
        match self {
            Category::Notes => 10,
            Category::Intervals => 20,
            Category::Scales | Category::Harmony | Category::ScaleTable => 0,
        }
    }

    /// True for categories graded as a full table rather than per question
    pub fn is_table(self) -> bool {
        matches!(
            self,
            Category::Scales | Category::Harmony | Category::ScaleTable
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Notes => "notes",
            Category::Intervals => "intervals",
            Category::Scales => "scales",
            Category::Harmony => "harmony",
            Category::ScaleTable => "scale_table",
        };
        write!(f, "{}", s)
    }
}

/// Errors from driving a drill outside its documented shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// A table category handed to the multiple-choice session
    #[error("category {0} is graded as a full table, not multiple choice")]
    NotMultipleChoice(Category),

    /// A cell coordinate outside the editable region of a table drill
    #[error("cell (row {row}, degree index {degree}) is not editable")]
    InvalidCell { row: usize, degree: usize },

    #[error(transparent)]
    Theory(#[from] TheoryError),
}

/// What a multiple-choice question is actually asking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Which note is shown/played?
    Note { answer: NoteName },
    /// Which interval separates the two notes?
    Interval {
        first: NoteName,
        second: NoteName,
        semitones: u8,
    },
}

/// A generated multiple-choice question
///
/// Holds no state beyond its own fields; created fresh per step and
/// discarded once graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    category: Category,
    prompt: Prompt,
    answer: String,
    options: Vec<String>,
}

impl Question {
    pub(crate) fn new(category: Category, prompt: Prompt, answer: String, options: Vec<String>) -> Self {
        Self {
            category,
            prompt,
            answer,
            options,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The structured prompt (note to render, note pair to play, ...)
    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    /// The answer string an exact match is graded against
    pub fn correct_answer(&self) -> &str {
        &self.answer
    }

    /// The four shuffled options, correct answer included
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Outcome of grading one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeResult {
    pub correct: bool,
    /// Points added to the running score (0 when wrong)
    pub score_delta: u32,
}

/// Final report of a completed drill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_score: u32,
    pub steps_completed: u32,
}
