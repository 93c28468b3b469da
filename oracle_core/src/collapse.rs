//! Resistance-based digit selection ("collapse").
//!
//! Every digit starts at the same base resistance; frequency and feedback
//! signals combine into a resonance value that is subtracted, damped by the
//! entropy parameter. The digit with the lowest remaining resistance is the
//! primary choice, with an entropy-gated random draw between the top two.

use std::cmp::Ordering;

use rand::Rng;

use crate::analysis::CombinedAnalysis;
use crate::data::feedback::HitRecord;
use crate::data::sequence::DIGIT_SPAN;

/// Starting resistance for every digit.
pub const BASE_RESISTANCE: f64 = 100.0;

/// Weight of the combined global digit frequency.
pub const GLOBAL_FREQ_WEIGHT: f64 = 0.4;

/// Weight of the target column's positional frequency.
pub const COLUMN_FREQ_WEIGHT: f64 = 2.5;

/// Weight of the first-prize frequency, applied at rank 1 only.
pub const FIRST_PRIZE_WEIGHT: f64 = 8.0;

/// Weight of each full-confirmation hit at the target rank whose value
/// mentions the digit.
pub const HIT_SYNC_WEIGHT: f64 = 25.0;

/// Post-resonance resistance scores for all ten digits.
///
/// Columns beyond the tracked range contribute no positional signal, and
/// the first-prize table only applies when `rank == 1`. Lower is more
/// likely to be selected.
pub fn resistance_profile(
    analysis: &CombinedAnalysis,
    hits: &[HitRecord],
    entropy: f64,
    column: usize,
    rank: u8,
) -> [f64; DIGIT_SPAN] {
    let mut resistance = [BASE_RESISTANCE; DIGIT_SPAN];

    for (slot, digit) in resistance.iter_mut().zip(0u8..) {
        let mut resonance = f64::from(analysis.input.global_freq.count(digit)) * GLOBAL_FREQ_WEIGHT;

        if let Some(table) = analysis.input.column_freq.get(column) {
            resonance += f64::from(table.count(digit)) * COLUMN_FREQ_WEIGHT;
        }

        if rank == 1 {
            resonance +=
                f64::from(analysis.input.first_prize_freq.count(digit)) * FIRST_PRIZE_WEIGHT;
        }

        let synced_hits = hits
            .iter()
            .filter(|hit| hit.rank == rank && hit.is_full() && hit.mentions_digit(digit))
            .count();
        resonance += synced_hits as f64 * HIT_SYNC_WEIGHT;

        *slot -= resonance / (1.0 + entropy);
    }

    resistance
}

/// Select one digit for a (column, rank) slot.
///
/// The profile is stable-sorted ascending, so ties resolve toward the lower
/// digit. One uniform draw gates the selection: above `entropy` the lowest
/// resistance wins outright; otherwise a second draw picks uniformly between
/// the two lowest. The two draws are intentionally separate stages.
pub fn collapse_digit<R: Rng>(
    analysis: &CombinedAnalysis,
    hits: &[HitRecord],
    entropy: f64,
    column: usize,
    rank: u8,
    rng: &mut R,
) -> u8 {
    let profile = resistance_profile(analysis, hits, entropy, column, rank);

    let mut ranked: Vec<(u8, f64)> = profile
        .iter()
        .enumerate()
        .map(|(digit, &resistance)| (digit as u8, resistance))
        .collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let index = if rng.gen::<f64>() > entropy {
        0
    } else {
        rng.gen_range(0..2)
    };
    ranked[index].0
}
