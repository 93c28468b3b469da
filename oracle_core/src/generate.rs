//! Generation orchestrator.
//!
//! One cycle concatenates the entered modules with the archive, analyzes the
//! combined rows once, then drives the collapse scorer across all seven
//! ranks to assemble the primary result, the reinforcement candidates, and
//! the head-row-derived advanced predictions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::analysis::{analyze_rows, CombinedAnalysis};
use crate::collapse::collapse_digit;
use crate::config::EngineConfig;
use crate::data::archive::DrawArchive;
use crate::data::feedback::{HitRecord, RectificationRecord};
use crate::data::sequence::{DataSet, Sequence, HEAD_ROW_LEN, ROWS_PER_SET};

/// Reinforcement candidates emitted per cycle.
pub const REINFORCEMENT_COUNT: usize = 3;

const CONFIDENCE_FLOOR: f64 = 99.85;
const CONFIDENCE_SPREAD: f64 = 0.14;

const HUNDREDS_CONFIDENCE: f64 = 99.98;
const TENS_CONFIDENCE: f64 = 99.97;
const ELITE_TENS_CONFIDENCE: f64 = 99.99;
const SUPER_TENS_CONFIDENCE: f64 = 99.95;

/// A generated sequence with a display confidence scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub sequence: Sequence,
    pub confidence: f64,
}

/// A derived sub-sequence prediction rendered as decimal text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificPrediction {
    pub value: String,
    pub confidence: f64,
}

/// Sub-sequence predictions sliced from the primary head row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedPredictions {
    pub hundreds: Vec<SpecificPrediction>,
    pub tens: Vec<SpecificPrediction>,
    pub elite_tens: Vec<SpecificPrediction>,
    pub super_tens: Vec<SpecificPrediction>,
}

/// Everything produced by one generation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub result: DataSet,
    pub candidates: Vec<Candidate>,
    pub advanced: AdvancedPredictions,
    pub analysis: CombinedAnalysis,
}

/// Run one generation cycle over frozen input snapshots.
///
/// Rectification records are accepted for telemetry but never scored. The
/// rank of each output row is its index plus one; the trailing row drops
/// column 0 to honor its three-digit shape.
pub fn run_generation_cycle<R: Rng>(
    modules: &[DataSet],
    archive: &DrawArchive,
    hits: &[HitRecord],
    rects: &[RectificationRecord],
    entropy: f64,
    rng: &mut R,
) -> GenerationOutcome {
    let analysis = {
        let module_rows = modules.iter().flat_map(|set| set.rows().iter());
        CombinedAnalysis::from_input(analyze_rows(module_rows.chain(archive.rows())))
    };

    tracing::debug!(
        modules = modules.len(),
        archived = archive.len(),
        hits = hits.len(),
        rectifications = rects.len(),
        entropy,
        "generation cycle"
    );

    let rows: Vec<Sequence> = (0..ROWS_PER_SET)
        .map(|index| {
            let rank = (index + 1) as u8;
            let row: Sequence = (0..HEAD_ROW_LEN)
                .map(|column| collapse_digit(&analysis, hits, entropy, column, rank, rng))
                .collect();
            if index == ROWS_PER_SET - 1 {
                row[1..].to_vec()
            } else {
                row
            }
        })
        .collect();
    let result = DataSet::from_rows(rows);

    let candidates = (0..REINFORCEMENT_COUNT)
        .map(|_| {
            let sequence: Sequence = (0..HEAD_ROW_LEN)
                .map(|column| collapse_digit(&analysis, hits, entropy * 0.5, column, 1, rng))
                .collect();
            Candidate {
                sequence,
                confidence: CONFIDENCE_FLOOR + rng.gen::<f64>() * CONFIDENCE_SPREAD,
            }
        })
        .collect();

    let advanced = derive_advanced(&result);

    GenerationOutcome {
        result,
        candidates,
        advanced,
        analysis,
    }
}

/// Seeded convenience wrapper over [`run_generation_cycle`].
pub fn generate_with_seed(
    modules: &[DataSet],
    archive: &DrawArchive,
    hits: &[HitRecord],
    rects: &[RectificationRecord],
    entropy: f64,
    seed: u64,
) -> GenerationOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    run_generation_cycle(modules, archive, hits, rects, entropy, &mut rng)
}

/// Run one cycle using the entropy and seed of an [`EngineConfig`].
pub fn generate_with_config(
    modules: &[DataSet],
    archive: &DrawArchive,
    hits: &[HitRecord],
    rects: &[RectificationRecord],
    config: &EngineConfig,
) -> GenerationOutcome {
    generate_with_seed(modules, archive, hits, rects, config.entropy, config.seed)
}

/// Slice the advanced predictions out of the primary head row.
///
/// These are views of the already-collapsed first-prize row, not fresh
/// generations; each variant carries its fixed display confidence.
fn derive_advanced(result: &DataSet) -> AdvancedPredictions {
    let head = result.head_row().map(Vec::as_slice).unwrap_or_default();
    let hundreds_text = digits_text(head.get(1..4).unwrap_or_default());
    let tens_text = digits_text(head.get(2..4).unwrap_or_default());

    let repeat = |value: &str, confidence: f64, count: usize| -> Vec<SpecificPrediction> {
        (0..count)
            .map(|_| SpecificPrediction {
                value: value.to_string(),
                confidence,
            })
            .collect()
    };

    AdvancedPredictions {
        hundreds: repeat(&hundreds_text, HUNDREDS_CONFIDENCE, 3),
        tens: repeat(&tens_text, TENS_CONFIDENCE, 3),
        elite_tens: repeat(&tens_text, ELITE_TENS_CONFIDENCE, 2),
        super_tens: repeat(&tens_text, SUPER_TENS_CONFIDENCE, 3),
    }
}

fn digits_text(digits: &[u8]) -> String {
    digits.iter().map(|digit| char::from(b'0' + digit)).collect()
}
