// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval names and chromatic interval arithmetic.
//!
//! The model covers ascending intervals within a single octave only:
//! distances 1 through 12 semitones. Distance 0 (unison) and anything
//! wider than an octave are outside the domain.

use super::note::NoteName;
use super::TheoryError;

/// Canonical names for the twelve single-octave intervals, 1..=12 semitones
pub const INTERVAL_NAMES: [&str; 12] = [
    "Minor Second",
    "Major Second",
    "Minor Third",
    "Major Third",
    "Perfect Fourth",
    "Tritone",
    "Perfect Fifth",
    "Minor Sixth",
    "Major Sixth",
    "Minor Seventh",
    "Major Seventh",
    "Perfect Octave",
];

/// Two ascending octaves of sharp spellings starting at C.
///
/// Long enough that any of the twelve chromatic roots can reach a full
/// octave above itself without wrapping.
pub(crate) const CHROMATIC_RUN: [NoteName; 24] = {
    use self::NoteName::*;
    [
        C, Cs, D, Ds, E, F, Fs, G, Gs, A, As, B, //
        C, Cs, D, Ds, E, F, Fs, G, Gs, A, As, B,
    ]
};

/// Name of the interval spanning `semitones` (1..=12)
///
/// Fails with [`TheoryError::OutOfRange`] for 0 or anything past the octave.
pub fn interval_name(semitones: u8) -> Result<&'static str, TheoryError> {
    if semitones == 0 || semitones > 12 {
        return Err(TheoryError::OutOfRange(semitones as i32));
    }
    Ok(INTERVAL_NAMES[semitones as usize - 1])
}

/// The note reached by stepping `semitones` (1..=12) up from `root`
///
/// Steps through the sharp-spelled chromatic run, so the result is always
/// a sharp spelling regardless of how the root is spelled: a perfect
/// fourth above Db lands on F#, not Gb. Any of the twelve chromatic
/// positions works as a root; the run is two octaves long so the walk
/// never falls off the table.
pub fn second_note(root: NoteName, semitones: u8) -> Result<NoteName, TheoryError> {
    if semitones == 0 || semitones > 12 {
        return Err(TheoryError::OutOfRange(semitones as i32));
    }
    let start = root.pitch_class() as usize;
    Ok(CHROMATIC_RUN[start + semitones as usize])
}
