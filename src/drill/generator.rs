// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random question generation for multiple-choice drills.
//!
//! Each question carries exactly four unique options, the correct answer
//! among them, in unbiased shuffled order. The RNG is owned and seedable
//! so drills replay deterministically under test.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::theory::interval::CHROMATIC_RUN;
use crate::theory::{NoteName, INTERVAL_NAMES};

use super::{Category, DrillError, Prompt, Question};

/// Options per multiple-choice question
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Question factory for the multiple-choice categories
pub struct ExerciseGenerator {
    rng: StdRng,
}

impl ExerciseGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (deterministic output)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a question for a multiple-choice category
    ///
    /// Table categories are rejected; they are built with
    /// [`TableDrill`](super::table::TableDrill) instead.
    pub fn question_for(&mut self, category: Category) -> Result<Question, DrillError> {
        match category {
            Category::Notes => Ok(self.note_question()),
            Category::Intervals => Ok(self.interval_question()),
            other => Err(DrillError::NotMultipleChoice(other)),
        }
    }

    /// Note identification: one of the twelve chromatic notes, sharp spelling
    pub fn note_question(&mut self) -> Question {
        let answer = NoteName::CHROMATIC_SHARP[self.rng.gen_range(0..12)];
        let options = self.build_options(&answer.to_string(), |rng| {
            NoteName::CHROMATIC_SHARP[rng.gen_range(0..12)].to_string()
        });
        debug!(answer = %answer, "generated note question");
        Question::new(
            Category::Notes,
            Prompt::Note { answer },
            answer.to_string(),
            options,
        )
    }

    /// Interval identification: a root, a distance 1..=12, and the name
    ///
    /// Every chromatic position is eligible as the root; the two-octave
    /// chromatic run guarantees the second note exists without wrapping.
    pub fn interval_question(&mut self) -> Question {
        let root_index = self.rng.gen_range(0..12usize);
        let semitones = self.rng.gen_range(1..=12u8);
        let first = CHROMATIC_RUN[root_index];
        let second = CHROMATIC_RUN[root_index + semitones as usize];
        let answer = INTERVAL_NAMES[semitones as usize - 1];

        let options = self.build_options(answer, |rng| {
            INTERVAL_NAMES[rng.gen_range(0..12)].to_string()
        });
        debug!(%first, %second, semitones, "generated interval question");
        Question::new(
            Category::Intervals,
            Prompt::Interval {
                first,
                second,
                semitones,
            },
            answer.to_string(),
            options,
        )
    }

    /// Seed the option set with the answer, reject duplicate draws until
    /// four unique entries are collected, then shuffle (Fisher-Yates)
    fn build_options<F>(&mut self, answer: &str, mut draw: F) -> Vec<String>
    where
        F: FnMut(&mut StdRng) -> String,
    {
        let mut options = vec![answer.to_string()];
        while options.len() < OPTIONS_PER_QUESTION {
            let candidate = draw(&mut self.rng);
            if !options.contains(&candidate) {
                options.push(candidate);
            }
        }
        options.shuffle(&mut self.rng);
        options
    }
}

impl Default for ExerciseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_note_question_shape() {
        let mut gen = ExerciseGenerator::with_seed(7);
        for _ in 0..100 {
            let q = gen.note_question();
            assert_eq!(q.options().len(), OPTIONS_PER_QUESTION);
            let unique: HashSet<_> = q.options().iter().collect();
            assert_eq!(unique.len(), OPTIONS_PER_QUESTION);
            assert!(q.options().contains(&q.correct_answer().to_string()));
        }
    }

    #[test]
    fn test_interval_question_shape() {
        let mut gen = ExerciseGenerator::with_seed(7);
        for _ in 0..100 {
            let q = gen.interval_question();
            let unique: HashSet<_> = q.options().iter().collect();
            assert_eq!(unique.len(), OPTIONS_PER_QUESTION);
            assert!(q.options().contains(&q.correct_answer().to_string()));
            match q.prompt() {
                Prompt::Interval {
                    first,
                    second,
                    semitones,
                } => {
                    assert!((1..=12).contains(&semitones));
                    let dist = (second.pitch_class() as i16 - first.pitch_class() as i16)
                        .rem_euclid(12);
                    assert_eq!(dist as u8, semitones % 12);
                }
                other => panic!("unexpected prompt {:?}", other),
            }
        }
    }

    #[test]
    fn test_interval_answer_matches_distance() {
        let mut gen = ExerciseGenerator::with_seed(99);
        for _ in 0..100 {
            let q = gen.interval_question();
            if let Prompt::Interval { semitones, .. } = q.prompt() {
                assert_eq!(q.correct_answer(), INTERVAL_NAMES[semitones as usize - 1]);
            }
        }
    }

    #[test]
    fn test_seeded_generators_replay() {
        let mut a = ExerciseGenerator::with_seed(42);
        let mut b = ExerciseGenerator::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.note_question(), b.note_question());
            assert_eq!(a.interval_question(), b.interval_question());
        }
    }

    #[test]
    fn test_all_roots_are_reachable() {
        // The original generator pinned interval roots to the low end of
        // the note list; ours must eventually draw every chromatic root.
        let mut gen = ExerciseGenerator::with_seed(1);
        let mut roots = HashSet::new();
        for _ in 0..1000 {
            if let Prompt::Interval { first, .. } = gen.interval_question().prompt() {
                roots.insert(first);
            }
        }
        assert_eq!(roots.len(), 12);
    }

    #[test]
    fn test_table_categories_rejected() {
        let mut gen = ExerciseGenerator::with_seed(0);
        assert_eq!(
            gen.question_for(Category::Scales),
            Err(DrillError::NotMultipleChoice(Category::Scales))
        );
    }
}
