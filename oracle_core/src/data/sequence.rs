//! Draw sequence and record types.
//!
//! A draw record holds seven rows: six four-digit sequences followed by one
//! three-digit trailing sequence. Row 0 is the first-prize ("head") row and
//! receives extra weight during scoring.

use serde::{Deserialize, Serialize};

/// Rows in one complete draw record.
pub const ROWS_PER_SET: usize = 7;

/// Digits in rows 0-5 of a draw record.
pub const HEAD_ROW_LEN: usize = 4;

/// Digits in the trailing row of a draw record.
pub const TAIL_ROW_LEN: usize = 3;

/// Columns tracked by positional frequency analysis.
pub const TRACKED_COLUMNS: usize = 4;

/// Number of distinct digits (0-9).
pub const DIGIT_SPAN: usize = 10;

/// An ordered run of single digits (0-9).
pub type Sequence = Vec<u8>;

/// One draw record: an ordered collection of digit rows.
///
/// A well-formed record has exactly [`ROWS_PER_SET`] rows in the
/// 4/4/4/4/4/4/3 shape, but construction is best-effort: parsing keeps
/// malformed records so downstream analysis can skip what it cannot use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    rows: Vec<Sequence>,
}

impl DataSet {
    /// Build a record from pre-split digit rows, without shape validation.
    pub fn from_rows(rows: Vec<Sequence>) -> Self {
        Self { rows }
    }

    /// All rows in draw order.
    pub fn rows(&self) -> &[Sequence] {
        &self.rows
    }

    /// The first-prize row, when present.
    pub fn head_row(&self) -> Option<&Sequence> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether this record matches the canonical 4/4/4/4/4/4/3 draw shape
    /// with every element a digit.
    pub fn is_well_formed(&self) -> bool {
        self.rows.len() == ROWS_PER_SET
            && self.rows.iter().enumerate().all(|(index, row)| {
                let expected = if index == ROWS_PER_SET - 1 {
                    TAIL_ROW_LEN
                } else {
                    HEAD_ROW_LEN
                };
                row.len() == expected && row.iter().all(|&digit| digit < DIGIT_SPAN as u8)
            })
    }
}

impl From<Vec<Sequence>> for DataSet {
    fn from(rows: Vec<Sequence>) -> Self {
        Self::from_rows(rows)
    }
}
