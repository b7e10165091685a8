// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic fields: the seven diatonic chords of each key.
//!
//! Chord roots are the scale degrees of the key and chord qualities follow
//! a fixed per-mode pattern, so the field is built from the scale table
//! rather than stored twice. Degree indices are 0-based here; degree I is
//! index 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::NoteName;
use super::scale::{scale_of, Mode};
use super::TheoryError;

/// Triad quality, denoted by a suffix on the chord's root name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// The suffix appended to the root name ("" / "m" / "md")
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "md",
        }
    }
}

/// A chord symbol: root spelling plus quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: NoteName, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Parse a chord symbol (e.g. "F#m", "Bmd", "Eb")
    ///
    /// The diminished suffix is checked before the minor one so "md" is
    /// never read as a minor chord with trailing garbage.
    pub fn parse(s: &str) -> Result<Self, TheoryError> {
        let s = s.trim();
        if let Some(root) = s.strip_suffix("md") {
            return Ok(Chord::new(NoteName::parse(root)?, ChordQuality::Diminished));
        }
        if let Some(root) = s.strip_suffix('m') {
            return Ok(Chord::new(NoteName::parse(root)?, ChordQuality::Minor));
        }
        Ok(Chord::new(NoteName::parse(s)?, ChordQuality::Major))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

/// Quality of the chord built on a scale degree (0-based), fixed per mode
///
/// Major keys: I IV V major, II III VI minor, VII diminished.
/// Minor keys mirror this: III VI VII major, I IV V minor, II diminished.
/// Out-of-range degrees fail with [`TheoryError::OutOfRange`].
pub fn degree_quality(mode: Mode, degree: usize) -> Result<ChordQuality, TheoryError> {
    use self::ChordQuality::{Diminished as D, Major as M, Minor as Mi};
    const MAJOR_QUALITIES: [ChordQuality; 7] = [M, Mi, Mi, M, M, Mi, D];
    const MINOR_QUALITIES: [ChordQuality; 7] = [Mi, D, M, Mi, Mi, M, M];
    let qualities = match mode {
        Mode::Major => &MAJOR_QUALITIES,
        Mode::Minor => &MINOR_QUALITIES,
    };
    qualities
        .get(degree)
        .copied()
        .ok_or(TheoryError::OutOfRange(degree as i32))
}

/// The seven diatonic chords of a key, degrees I-VII
///
/// Same per-mode partiality as [`scale_of`]: an unsupported root fails
/// with [`TheoryError::UnknownRoot`].
pub fn harmonic_field_of(root: NoteName, mode: Mode) -> Result<[Chord; 7], TheoryError> {
    let degrees = scale_of(root, mode)?;
    let mut chords = [Chord::new(root, ChordQuality::Major); 7];
    for (i, chord) in chords.iter_mut().enumerate() {
        let quality = degree_quality(mode, i)?;
        *chord = Chord::new(degrees[i], quality);
    }
    Ok(chords)
}
