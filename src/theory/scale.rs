// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale tables for the major and natural minor modes.
//!
//! The degree rows are stored data, not derived: which enharmonic spelling
//! a key uses (Db major but C# minor, for instance) is a musical convention
//! that the engine trusts rather than computes. The tone/semitone pattern
//! per mode is the oracle used to cross-check the rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::NoteName;
use super::TheoryError;

/// One step of a scale's interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Whole tone (two semitones)
    Tone,
    /// Semitone
    Semitone,
}

impl Step {
    /// Width of this step in semitones
    pub fn semitones(self) -> u8 {
        match self {
            Step::Tone => 2,
            Step::Semitone => 1,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Tone => write!(f, "T"),
            Step::Semitone => write!(f, "ST"),
        }
    }
}

/// Scale modes supported by the drill tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    /// Natural minor (Aeolian)
    Minor,
}

impl Mode {
    /// Parse a mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "major" => Some(Mode::Major),
            "minor" | "natural_minor" | "naturalminor" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }

    /// The tone/semitone pattern shared by every root in this mode
    pub fn interval_pattern(self) -> [Step; 7] {
        use self::Step::{Semitone as St, Tone as T};
        match self {
            Mode::Major => [T, T, St, T, T, T, St],
            Mode::Minor => [T, St, T, T, St, T, T],
        }
    }

    /// The twelve roots this mode has table entries for, in chromatic order
    ///
    /// The two sets differ in accidental spelling (major keys favour flats
    /// where minor keys favour sharps, e.g. Db major but C# minor). A root
    /// valid in one mode is not guaranteed valid in the other.
    pub fn roots(self) -> &'static [NoteName; 12] {
        use super::note::NoteName::*;
        const MAJOR_ROOTS: [NoteName; 12] = [C, Db, D, Eb, E, F, Fs, G, Ab, A, Bb, B];
        const MINOR_ROOTS: [NoteName; 12] = [C, Cs, D, Eb, E, F, Fs, G, Gs, A, Bb, B];
        match self {
            Mode::Major => &MAJOR_ROOTS,
            Mode::Minor => &MINOR_ROOTS,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Major scale rows, degrees I-VII per root
const MAJOR_SCALES: [(NoteName, [NoteName; 7]); 12] = {
    use self::NoteName::*;
    [
        (C, [C, D, E, F, G, A, B]),
        (Db, [Db, Eb, F, Gb, Ab, Bb, C]),
        (D, [D, E, Fs, G, A, B, Cs]),
        (Eb, [Eb, F, G, Ab, Bb, C, D]),
        (E, [E, Fs, Gs, A, B, Cs, Ds]),
        (F, [F, G, A, Bb, C, D, E]),
        (Fs, [Fs, Gs, As, B, Cs, Ds, Es]),
        (G, [G, A, B, C, D, E, Fs]),
        (Ab, [Ab, Bb, C, Db, Eb, F, G]),
        (A, [A, B, Cs, D, E, Fs, Gs]),
        (Bb, [Bb, C, D, Eb, F, G, A]),
        (B, [B, Cs, Ds, E, Fs, Gs, As]),
    ]
};

/// Natural minor scale rows, degrees I-VII per root
const MINOR_SCALES: [(NoteName, [NoteName; 7]); 12] = {
    use self::NoteName::*;
    [
        (C, [C, D, Eb, F, G, Ab, Bb]),
        (Cs, [Cs, Ds, E, Fs, Gs, A, B]),
        (D, [D, E, F, G, A, Bb, C]),
        (Eb, [Eb, F, Gb, Ab, Bb, Cb, Db]),
        (E, [E, Fs, G, A, B, C, D]),
        (F, [F, G, Ab, Bb, C, Db, Eb]),
        (Fs, [Fs, Gs, A, B, Cs, D, E]),
        (G, [G, A, Bb, C, D, Eb, F]),
        (Gs, [Gs, As, B, Cs, Ds, E, Fs]),
        (A, [A, B, C, D, E, F, G]),
        (Bb, [Bb, C, Db, Eb, F, Gb, Ab]),
        (B, [B, Cs, D, E, Fs, G, A]),
    ]
};

/// Look up the seven degrees of a scale
///
/// Fails with [`TheoryError::UnknownRoot`] when the root has no entry in
/// the requested mode. The tables are deliberately partial per mode; the
/// caller re-rolls or picks a different root.
pub fn scale_of(root: NoteName, mode: Mode) -> Result<&'static [NoteName; 7], TheoryError> {
    let table: &[(NoteName, [NoteName; 7])] = match mode {
        Mode::Major => &MAJOR_SCALES,
        Mode::Minor => &MINOR_SCALES,
    };
    table
        .iter()
        .find(|(r, _)| *r == root)
        .map(|(_, degrees)| degrees)
        .ok_or(TheoryError::UnknownRoot { root, mode })
}

/// Check that a degree row follows its mode's tone/semitone pattern
///
/// Walks the pattern from the stored root and compares pitch classes at
/// every degree, including the final step back to the octave. Spelling is
/// not checked here; the stored row is the spelling authority.
pub fn follows_pattern(degrees: &[NoteName; 7], mode: Mode) -> bool {
    let pattern = mode.interval_pattern();
    for i in 0..7 {
        let next = degrees.get(i + 1).copied().unwrap_or(degrees[0]);
        let expected = (degrees[i].pitch_class() + pattern[i].semitones()) % 12;
        if next.pitch_class() != expected {
            return false;
        }
    }
    true
}
