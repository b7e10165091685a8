// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Multiple-choice drill session state machine.
//!
//! A session runs `Briefing -> Active(step 0..=4) -> Graded` and is
//! dropped once the summary has been read. All state lives on the session
//! value itself; there is no ambient score anywhere.

use tracing::debug;

use super::generator::ExerciseGenerator;
use super::{Category, DrillError, GradeResult, Question, SessionSummary};

/// Questions per multiple-choice drill
pub const QUESTIONS_PER_DRILL: usize = 5;

/// Lifecycle states of a drill session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, briefing shown, no question yet
    Briefing,
    /// Questions being answered
    Active,
    /// Final score available; terminal
    Graded,
}

/// An in-progress multiple-choice drill
pub struct QuizSession {
    category: Category,
    state: SessionState,
    step: usize,
    score: u32,
    question: Option<Question>,
    locked: bool,
}

impl QuizSession {
    /// Create a session in the briefing state
    ///
    /// Only the multiple-choice categories are accepted; table categories
    /// are driven through [`TableDrill`](super::table::TableDrill).
    pub fn new(category: Category) -> Result<Self, DrillError> {
        if category.is_table() {
            return Err(DrillError::NotMultipleChoice(category));
        }
        Ok(Self {
            category,
            state: SessionState::Briefing,
            step: 0,
            score: 0,
            question: None,
            locked: false,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current step, 0-based
    pub fn step(&self) -> usize {
        self.step
    }

    /// Running score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The question currently on screen, if any
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Leave the briefing and generate the first question
    ///
    /// A no-op outside the briefing state.
    pub fn begin(&mut self, gen: &mut ExerciseGenerator) {
        if self.state != SessionState::Briefing {
            return;
        }
        self.state = SessionState::Active;
        self.next_question(gen);
    }

    /// Grade an answer against the current question
    ///
    /// The first answer per question is final: it locks the question and
    /// returns the grade. Any later submission on the same question is a
    /// no-op returning `None`, not an error. Comparison is exact after
    /// trimming.
    pub fn answer(&mut self, given: &str) -> Option<GradeResult> {
        if self.state != SessionState::Active || self.locked {
            return None;
        }
        let question = self.question.as_ref()?;
        let correct = given.trim() == question.correct_answer();
        let score_delta = if correct {
            self.category.points_per_question()
        } else {
            0
        };
        self.score += score_delta;
        self.locked = true;
        debug!(
            category = %self.category,
            step = self.step,
            correct,
            score = self.score,
            "answer graded"
        );
        Some(GradeResult {
            correct,
            score_delta,
        })
    }

    /// Move past a locked question: next question, or grade the drill
    /// after the fifth answer
    pub fn advance(&mut self, gen: &mut ExerciseGenerator) {
        if self.state != SessionState::Active || !self.locked {
            return;
        }
        if self.step + 1 >= QUESTIONS_PER_DRILL {
            self.state = SessionState::Graded;
            self.question = None;
            debug!(category = %self.category, score = self.score, "drill graded");
        } else {
            self.step += 1;
            self.next_question(gen);
        }
    }

    /// Final report, available only once the drill is graded
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.state != SessionState::Graded {
            return None;
        }
        Some(SessionSummary {
            total_score: self.score,
            steps_completed: QUESTIONS_PER_DRILL as u32,
        })
    }

    fn next_question(&mut self, gen: &mut ExerciseGenerator) {
        self.locked = false;
        // new() guarantees a multiple-choice category
        self.question = gen.question_for(self.category).ok();
    }
}
