// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Full-table drills: fill in every scale or harmonic field row.
//!
//! One row per root in the mode's chromatic set, degree I pre-filled and
//! read-only, degrees II-VII blank. Cells are graded on every keystroke
//! (trimmed, case-insensitive) so the caller can give immediate feedback;
//! an explicit verify action aggregates the whole table without touching
//! any cell state.

use tracing::debug;

use crate::theory::{harmonic_field_of, scale_of, Mode, NoteName};

use super::DrillError;

/// Degrees per row (I-VII)
const DEGREES: usize = 7;
/// Editable degrees per row (II-VII)
const EDITABLE_PER_ROW: usize = DEGREES - 1;

/// Which table the drill fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Scale degrees (note spellings)
    Scales,
    /// Harmonic field degrees (chord symbols)
    Harmony,
}

/// One row of the drill table
#[derive(Debug, Clone)]
struct TableRow {
    root: NoteName,
    /// Expected display values for all seven degrees
    expected: [String; 7],
    /// What the user has typed (degree I holds the pre-fill)
    entries: [String; 7],
    /// Per-cell grading; `None` for untouched or cleared cells
    feedback: [Option<bool>; 7],
}

/// Aggregate result of an explicit verify action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableVerdict {
    /// Editable cells currently correct
    pub correct_count: usize,
    /// Total editable cells (12 roots x 6 degrees = 72)
    pub total: usize,
    /// True only when every editable cell is correct at once
    pub complete: bool,
    /// 100 on completion, otherwise 0
    pub score: u32,
}

/// A full-table drill over all twelve roots of a mode
pub struct TableDrill {
    kind: TableKind,
    mode: Mode,
    rows: Vec<TableRow>,
}

impl TableDrill {
    /// Build the drill table for a kind and mode
    ///
    /// Every root in the mode's set has a table entry, so construction
    /// cannot hit `UnknownRoot`.
    pub fn new(kind: TableKind, mode: Mode) -> Result<Self, DrillError> {
        let mut rows = Vec::with_capacity(12);
        for &root in mode.roots() {
            let expected: [String; 7] = match kind {
                TableKind::Scales => {
                    let degrees = scale_of(root, mode)?;
                    std::array::from_fn(|i| degrees[i].to_string())
                }
                TableKind::Harmony => {
                    let chords = harmonic_field_of(root, mode)?;
                    std::array::from_fn(|i| chords[i].to_string())
                }
            };
            let mut entries: [String; 7] = Default::default();
            entries[0] = expected[0].clone();
            rows.push(TableRow {
                root,
                expected,
                entries,
                feedback: [None; 7],
            });
        }
        Ok(Self { kind, mode, rows })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of rows (always 12)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Root of a row
    pub fn root_of(&self, row: usize) -> Option<NoteName> {
        self.rows.get(row).map(|r| r.root)
    }

    /// The read-only degree I value of a row
    pub fn prefilled(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.entries[0].as_str())
    }

    /// What the user has typed in a cell
    pub fn entry(&self, row: usize, degree: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.entries.get(degree))
            .map(String::as_str)
    }

    /// Grading state of a cell (`None` when blank or never graded)
    pub fn feedback(&self, row: usize, degree: usize) -> Option<bool> {
        self.rows
            .get(row)
            .and_then(|r| r.feedback.get(degree))
            .copied()
            .flatten()
    }

    /// Enter a value into an editable cell and grade it immediately
    ///
    /// `degree` is the 0-based degree index; only 1..=6 (degrees II-VII)
    /// are editable. Grading trims and ignores case, so "eb" matches
    /// "Eb". Clearing a cell resets its feedback to unjudged. Returns
    /// whether the entered value is correct.
    pub fn set_cell(&mut self, row: usize, degree: usize, value: &str) -> Result<bool, DrillError> {
        if degree == 0 || degree >= DEGREES || row >= self.rows.len() {
            return Err(DrillError::InvalidCell { row, degree });
        }
        let row_data = &mut self.rows[row];
        let trimmed = value.trim();
        row_data.entries[degree] = trimmed.to_string();

        if trimmed.is_empty() {
            row_data.feedback[degree] = None;
            return Ok(false);
        }

        let correct = trimmed.eq_ignore_ascii_case(&row_data.expected[degree]);
        row_data.feedback[degree] = Some(correct);
        debug!(
            root = %row_data.root,
            degree,
            correct,
            "table cell graded"
        );
        Ok(correct)
    }

    /// Aggregate correctness across all 72 editable cells
    ///
    /// Does not mutate any cell: the caller may keep correcting answers
    /// and verify again.
    pub fn verify(&self) -> TableVerdict {
        let total = self.rows.len() * EDITABLE_PER_ROW;
        let correct_count = self
            .rows
            .iter()
            .flat_map(|row| {
                (1..DEGREES).map(move |i| row.entries[i].eq_ignore_ascii_case(&row.expected[i]))
            })
            .filter(|&c| c)
            .count();
        let complete = correct_count == total;
        TableVerdict {
            correct_count,
            total,
            complete,
            score: if complete { 100 } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill every editable cell with its expected value
    fn fill_correctly(drill: &mut TableDrill) {
        for row in 0..drill.row_count() {
            for degree in 1..DEGREES {
                let expected = drill.rows[row].expected[degree].clone();
                drill.set_cell(row, degree, &expected).unwrap();
            }
        }
    }

    #[test]
    fn test_table_shape() {
        let drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        assert_eq!(drill.row_count(), 12);
        assert_eq!(drill.root_of(0), Some(NoteName::C));
        assert_eq!(drill.prefilled(0), Some("C"));
        assert_eq!(drill.prefilled(1), Some("Db"));
        // Editable cells start blank and unjudged
        assert_eq!(drill.entry(0, 1), Some(""));
        assert_eq!(drill.feedback(0, 1), None);
    }

    #[test]
    fn test_harmony_table_prefills_chord_symbols() {
        let drill = TableDrill::new(TableKind::Harmony, Mode::Minor).unwrap();
        assert_eq!(drill.prefilled(0), Some("Cm"));
        assert_eq!(drill.prefilled(1), Some("C#m"));
    }

    #[test]
    fn test_incremental_cell_grading() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        // C major degree II is D
        assert!(drill.set_cell(0, 1, "D").unwrap());
        assert_eq!(drill.feedback(0, 1), Some(true));

        assert!(!drill.set_cell(0, 2, "F").unwrap());
        assert_eq!(drill.feedback(0, 2), Some(false));
    }

    #[test]
    fn test_grading_is_case_insensitive_and_trimmed() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        // Db major degree II is Eb
        assert!(drill.set_cell(1, 1, " eb ").unwrap());
        // G major degree VII is F#
        let g_row = 7;
        assert_eq!(drill.root_of(g_row), Some(NoteName::G));
        assert!(drill.set_cell(g_row, 6, "f#").unwrap());
    }

    #[test]
    fn test_clearing_a_cell_resets_feedback() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        drill.set_cell(0, 1, "D").unwrap();
        assert_eq!(drill.feedback(0, 1), Some(true));
        drill.set_cell(0, 1, "").unwrap();
        assert_eq!(drill.feedback(0, 1), None);
    }

    #[test]
    fn test_degree_one_is_read_only() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        assert_eq!(
            drill.set_cell(0, 0, "X"),
            Err(DrillError::InvalidCell { row: 0, degree: 0 })
        );
        assert_eq!(
            drill.set_cell(0, 7, "X"),
            Err(DrillError::InvalidCell { row: 0, degree: 7 })
        );
        assert_eq!(
            drill.set_cell(12, 1, "X"),
            Err(DrillError::InvalidCell { row: 12, degree: 1 })
        );
    }

    #[test]
    fn test_complete_table_scores_hundred() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Minor).unwrap();
        fill_correctly(&mut drill);
        let verdict = drill.verify();
        assert_eq!(verdict.correct_count, 72);
        assert_eq!(verdict.total, 72);
        assert!(verdict.complete);
        assert_eq!(verdict.score, 100);
    }

    #[test]
    fn test_one_missing_cell_reports_seventy_one() {
        let mut drill = TableDrill::new(TableKind::Scales, Mode::Major).unwrap();
        fill_correctly(&mut drill);
        // Blank out one cell
        drill.set_cell(11, 6, "").unwrap();

        let verdict = drill.verify();
        assert_eq!(verdict.correct_count, 71);
        assert!(!verdict.complete);
        assert_eq!(verdict.score, 0);

        // Verify mutated nothing: prior correct cells keep their state
        assert_eq!(drill.feedback(0, 1), Some(true));
        assert_eq!(drill.entry(0, 1), Some("D"));

        // The user keeps editing and re-verifies
        let last = drill.rows[11].expected[6].clone();
        drill.set_cell(11, 6, &last).unwrap();
        assert!(drill.verify().complete);
    }

    #[test]
    fn test_harmony_table_completion() {
        let mut drill = TableDrill::new(TableKind::Harmony, Mode::Major).unwrap();
        fill_correctly(&mut drill);
        assert!(drill.verify().complete);

        // Chord grading tolerates case differences too
        drill.set_cell(0, 1, "dm").unwrap();
        assert!(drill.verify().complete);
    }
}
