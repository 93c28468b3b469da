//! Digit frequency analysis over flattened draw rows.
//!
//! One pass over a row list accumulates the global, per-column, and
//! first-prize frequency tables plus row sums and parity totals. Every table
//! covers all ten digits; empty input yields a fully zero-filled result.

use serde::{Deserialize, Serialize};

use crate::data::sequence::{Sequence, DIGIT_SPAN, ROWS_PER_SET, TRACKED_COLUMNS};

/// Occurrence counts for every digit 0-9.
///
/// Backed by a fixed array so no digit is ever absent, unlike a sparse map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: [u32; DIGIT_SPAN],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one digit. Out-of-range digits read as zero.
    pub fn count(&self, digit: u8) -> u32 {
        self.counts
            .get(usize::from(digit))
            .copied()
            .unwrap_or_default()
    }

    /// Increment one digit's count. Out-of-range digits are ignored.
    pub fn increment(&mut self, digit: u8) {
        if let Some(slot) = self.counts.get_mut(usize::from(digit)) {
            *slot += 1;
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn counts(&self) -> &[u32; DIGIT_SPAN] {
        &self.counts
    }

    /// (digit, count) pairs in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(digit, &count)| (digit as u8, count))
    }
}

/// Even/odd digit totals across the analyzed rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityTotals {
    pub evens: u32,
    pub odds: u32,
}

/// Aggregate frequency view of one flattened dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Digit sum of each non-empty row, in input order.
    pub row_sums: Vec<u32>,
    /// Every digit of every row.
    pub global_freq: FrequencyTable,
    /// Per-column tables for the first four columns only.
    pub column_freq: [FrequencyTable; TRACKED_COLUMNS],
    /// Digits of first-prize rows (flattened index 0, 7, 14, ...).
    pub first_prize_freq: FrequencyTable,
    pub parity: ParityTotals,
}

/// The historical side of a [`CombinedAnalysis`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalView {
    pub digit_freq: FrequencyTable,
}

/// Analysis of the combined input, paired with a historical frequency view.
///
/// The historical view currently mirrors the combined global table; the
/// split exists so the two can diverge without changing the scorer's
/// interface. See DESIGN.md for the provenance of this duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAnalysis {
    pub input: AnalysisResult,
    pub historical: HistoricalView,
}

impl CombinedAnalysis {
    /// Wrap an input analysis, duplicating its global table as the
    /// historical view.
    pub fn from_input(input: AnalysisResult) -> Self {
        let historical = HistoricalView {
            digit_freq: input.global_freq.clone(),
        };
        Self { input, historical }
    }

    /// Per-digit sum of the input and historical counts, as rendered by the
    /// statistics panel.
    pub fn display_series(&self) -> [u32; DIGIT_SPAN] {
        let mut series = [0u32; DIGIT_SPAN];
        for (digit, slot) in series.iter_mut().enumerate() {
            let digit = digit as u8;
            *slot = self.input.global_freq.count(digit) + self.historical.digit_freq.count(digit);
        }
        series
    }
}

/// Analyze a flat list of rows.
///
/// Empty rows are skipped without error but still occupy their index, so
/// first-prize detection (`index % 7 == 0`) stays aligned with the seven-row
/// grouping of the input.
pub fn analyze_rows<'a, I>(rows: I) -> AnalysisResult
where
    I: IntoIterator<Item = &'a Sequence>,
{
    let mut result = AnalysisResult::default();

    for (index, row) in rows.into_iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        let is_head = index % ROWS_PER_SET == 0;

        result.row_sums.push(row.iter().map(|&d| u32::from(d)).sum());
        for (column, &digit) in row.iter().enumerate() {
            result.global_freq.increment(digit);
            if let Some(table) = result.column_freq.get_mut(column) {
                table.increment(digit);
            }
            if is_head {
                result.first_prize_freq.increment(digit);
            }
            if digit % 2 == 0 {
                result.parity.evens += 1;
            } else {
                result.parity.odds += 1;
            }
        }
    }

    result
}
