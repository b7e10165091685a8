// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory rules: notes, scales, harmonic fields, and intervals.
//!
//! Everything in this module is a pure lookup over closed tables. The
//! stored spellings are the ground truth; the tone/semitone patterns are
//! only used to cross-check them, never to derive them.

pub mod harmony;
pub mod interval;
pub mod note;
pub mod registry;
pub mod scale;

pub use harmony::{degree_quality, harmonic_field_of, Chord, ChordQuality};
pub use interval::{interval_name, second_note, INTERVAL_NAMES};
pub use note::{frequency_of, NoteName};
pub use registry::{ScaleDefinition, TheoryRegistry};
pub use scale::{follows_pattern, scale_of, Mode, Step};

use thiserror::Error;

/// Precondition violations in the theory tables
///
/// All recoverable by the caller: re-roll the pick, fall back, or report.
/// Every operation is total over its documented domain and fails closed
/// outside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A spelling outside the closed 21-entry set
    #[error("unknown note spelling: {0:?}")]
    UnknownSpelling(String),

    /// A root with no table entry in the requested mode
    #[error("no {mode} table entry for root {root}")]
    UnknownRoot { root: NoteName, mode: Mode },

    /// An interval distance or degree index outside the model
    #[error("value {0} outside the single-octave domain")]
    OutOfRange(i32),
}
