// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names and the note-to-frequency table.
//!
//! The engine works with *spellings*, not pitch classes: Db and C# sound
//! identical but are distinct answers in an exercise. The set of spellings
//! is closed (21 entries) and includes the theoretical equivalents
//! B#/Cb/E#/Fb so that every scale row in the tables can be written with
//! its conventional accidentals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TheoryError;

/// A named pitch class (no octave information)
///
/// Serializes as its textual spelling ("F#", "Bb") rather than the
/// variant name, so data files read the way musicians write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NoteName {
    C,
    Cs, // C#
    Db,
    D,
    Ds, // D#
    Eb,
    E,
    Es, // E#
    F,
    Fs, // F#
    Gb,
    G,
    Gs, // G#
    Ab,
    A,
    As, // A#
    Bb,
    B,
    Cb,
    Fb,
    Bs, // B#
}

impl NoteName {
    /// Every spelling the engine knows about
    pub const ALL: [NoteName; 21] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::Db,
        NoteName::D,
        NoteName::Ds,
        NoteName::Eb,
        NoteName::E,
        NoteName::Es,
        NoteName::F,
        NoteName::Fs,
        NoteName::Gb,
        NoteName::G,
        NoteName::Gs,
        NoteName::Ab,
        NoteName::A,
        NoteName::As,
        NoteName::Bb,
        NoteName::B,
        NoteName::Cb,
        NoteName::Fb,
        NoteName::Bs,
    ];

    /// The twelve chromatic notes in sharp spelling, ascending from C.
    /// Note identification questions draw from this set.
    pub const CHROMATIC_SHARP: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Parse a spelling from user input (e.g. "C", "c#", " Bb ")
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Enharmonic spellings parse to distinct values: "Db" is not "C#".
    pub fn parse(s: &str) -> Result<Self, TheoryError> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "C" => Ok(NoteName::C),
            "C#" => Ok(NoteName::Cs),
            "DB" => Ok(NoteName::Db),
            "D" => Ok(NoteName::D),
            "D#" => Ok(NoteName::Ds),
            "EB" => Ok(NoteName::Eb),
            "E" => Ok(NoteName::E),
            "E#" => Ok(NoteName::Es),
            "F" => Ok(NoteName::F),
            "F#" => Ok(NoteName::Fs),
            "GB" => Ok(NoteName::Gb),
            "G" => Ok(NoteName::G),
            "G#" => Ok(NoteName::Gs),
            "AB" => Ok(NoteName::Ab),
            "A" => Ok(NoteName::A),
            "A#" => Ok(NoteName::As),
            "BB" => Ok(NoteName::Bb),
            "B" => Ok(NoteName::B),
            "CB" => Ok(NoteName::Cb),
            "FB" => Ok(NoteName::Fb),
            "B#" => Ok(NoteName::Bs),
            _ => Err(TheoryError::UnknownSpelling(s.trim().to_string())),
        }
    }

    /// Equal-tempered frequency in Hz (fourth octave)
    ///
    /// Enharmonic spellings share a frequency (C# and Db are both 277.18);
    /// that is the point of the exercise, not a table error. Cb sounds as
    /// the B below C4 and B# as C4 itself, matching conventional usage.
    pub fn frequency(self) -> f64 {
        match self {
            NoteName::C => 261.63,
            NoteName::Cs | NoteName::Db => 277.18,
            NoteName::D => 293.66,
            NoteName::Ds | NoteName::Eb => 311.13,
            NoteName::E | NoteName::Fb => 329.63,
            NoteName::Es | NoteName::F => 349.23,
            NoteName::Fs | NoteName::Gb => 369.99,
            NoteName::G => 392.00,
            NoteName::Gs | NoteName::Ab => 415.30,
            NoteName::A => 440.00,
            NoteName::As | NoteName::Bb => 466.16,
            NoteName::B => 493.88,
            NoteName::Cb => 246.94,
            NoteName::Bs => 261.63,
        }
    }

    /// Chromatic pitch class (0-11), C = 0
    ///
    /// Enharmonic spellings collapse to the same class (B# = 0, Cb = 11).
    /// Used by the interval calculator and the scale pattern oracle; answer
    /// grading always compares spellings, never classes.
    pub fn pitch_class(self) -> u8 {
        match self {
            NoteName::C | NoteName::Bs => 0,
            NoteName::Cs | NoteName::Db => 1,
            NoteName::D => 2,
            NoteName::Ds | NoteName::Eb => 3,
            NoteName::E | NoteName::Fb => 4,
            NoteName::Es | NoteName::F => 5,
            NoteName::Fs | NoteName::Gb => 6,
            NoteName::G => 7,
            NoteName::Gs | NoteName::Ab => 8,
            NoteName::A => 9,
            NoteName::As | NoteName::Bb => 10,
            NoteName::B | NoteName::Cb => 11,
        }
    }

    /// True iff the spelling carries a sharp or flat marker
    ///
    /// Display embellishment hint for callers; grading never consults this.
    pub fn is_accidental(self) -> bool {
        !matches!(
            self,
            NoteName::C
                | NoteName::D
                | NoteName::E
                | NoteName::F
                | NoteName::G
                | NoteName::A
                | NoteName::B
        )
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::Es => "E#",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
            NoteName::Cb => "Cb",
            NoteName::Fb => "Fb",
            NoteName::Bs => "B#",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<String> for NoteName {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        NoteName::parse(&s)
    }
}

impl From<NoteName> for String {
    fn from(note: NoteName) -> String {
        note.to_string()
    }
}

/// Look up the frequency for a spelling given as text
///
/// Fails with [`TheoryError::UnknownSpelling`] outside the closed set.
pub fn frequency_of(spelling: &str) -> Result<f64, TheoryError> {
    NoteName::parse(spelling).map(NoteName::frequency)
}
