//! # Draw Oracle Core
//!
//! A synchronous engine that turns a bounded archive of historical digit
//! draws plus freshly entered modules into new draw predictions. Digit
//! frequencies resonate against a base resistance; the digit whose
//! resistance collapses lowest wins each (column, rank) slot, with an
//! entropy parameter gating a randomized tie-break between the two
//! strongest digits.
//!
//! No predictive validity is claimed: the contract is mechanical. Given the
//! same snapshots and seed, a cycle reproduces exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use draw_oracle_core::{generate_with_seed, DrawArchive, parse_modules};
//!
//! let raw = vec![vec![
//!     "4921".to_string(), "0385".to_string(), "7710".to_string(),
//!     "5566".to_string(), "1024".to_string(), "9873".to_string(),
//!     "402".to_string(),
//! ]];
//! let parsed = parse_modules(&raw);
//! assert!(parsed.errors.is_empty());
//!
//! let mut archive = DrawArchive::new();
//! for module in &parsed.modules {
//!     archive.record(module.clone());
//! }
//!
//! let outcome = generate_with_seed(&parsed.modules, &archive, &[], &[], 0.45, 42);
//! assert_eq!(outcome.result.rows().len(), 7);
//! ```
//!
//! ## Core Modules
//!
//! - [`analysis`] - Digit frequency tables over flattened draw rows
//! - [`collapse`] - Resistance scoring and digit selection
//! - [`generate`] - Generation cycle orchestration
//! - [`parse`] - Raw module text to draw records
//! - [`config`] - Engine configuration via TOML
//! - [`logging`] - JSON line-delimited cycle logging

pub mod analysis;
pub mod collapse;
pub mod config;
pub mod data;
pub mod generate;
pub mod logging;
pub mod parse;

// === Core API ===

pub use analysis::{
    analyze_rows, AnalysisResult, CombinedAnalysis, FrequencyTable, HistoricalView, ParityTotals,
};
pub use config::{ConfigError, EngineConfig};
pub use data::archive::{DrawArchive, DEFAULT_ARCHIVE_CAPACITY};
pub use data::feedback::{HitKind, HitRecord, HitStatus, RectificationRecord};
pub use data::sequence::{
    DataSet, Sequence, DIGIT_SPAN, HEAD_ROW_LEN, ROWS_PER_SET, TAIL_ROW_LEN, TRACKED_COLUMNS,
};
pub use generate::{
    generate_with_config, generate_with_seed, run_generation_cycle, AdvancedPredictions,
    Candidate, GenerationOutcome, SpecificPrediction, REINFORCEMENT_COUNT,
};
pub use parse::{parse_modules, ParseOutcome};

// === Advanced API (import from submodules when needed) ===
// - use draw_oracle_core::collapse::{collapse_digit, resistance_profile};
// - use draw_oracle_core::logging::{log_generation, GenerationLogEntry};
