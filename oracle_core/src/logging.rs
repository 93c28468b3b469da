//! JSON line-delimited logging of generation cycles.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::generate::GenerationOutcome;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

#[derive(Debug, Serialize)]
pub struct GenerationLogEntry {
    pub timestamp_ms: u128,
    pub entropy: f64,
    pub module_count: usize,
    pub archived_sets: usize,
    pub hit_count: usize,
    pub rectification_count: usize,
    pub head_row: Vec<u8>,
}

impl GenerationLogEntry {
    /// Snapshot one cycle's inputs and resulting head row.
    pub fn new(
        outcome: &GenerationOutcome,
        entropy: f64,
        module_count: usize,
        archived_sets: usize,
        hit_count: usize,
        rectification_count: usize,
    ) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            entropy,
            module_count,
            archived_sets,
            hit_count,
            rectification_count,
            head_row: outcome.result.head_row().cloned().unwrap_or_default(),
        }
    }
}

pub fn log_generation(entry: &GenerationLogEntry) -> io::Result<()> {
    log_dir()?;
    append_json_line("logs/generations.jsonl", entry)
}
