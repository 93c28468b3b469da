//! Feedback records supplied by the calling application.
//!
//! A [`HitRecord`] marks a generated value that was later confirmed against
//! a real draw; full confirmations at a given rank feed back into scoring
//! for that rank. A [`RectificationRecord`] captures a manual correction of
//! a generated value and is carried for telemetry only.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which slice of a draw row a feedback value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    FourDigit,
    ThreeDigit,
    TwoDigit,
}

/// Confirmation strength of a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitStatus {
    /// Exact confirmation; influences scoring at the record's rank.
    Full,
    /// Partial confirmation; kept for the record, ignored by scoring.
    Near,
}

/// A confirmed (or nearly confirmed) generated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub id: Uuid,
    pub kind: HitKind,
    pub status: HitStatus,
    /// Realized value as decimal text, e.g. "4921".
    pub value: String,
    /// Prize rank the value was confirmed at (1-5).
    pub rank: u8,
    pub timestamp_ms: u128,
}

impl HitRecord {
    /// Record a hit with a fresh id and the current timestamp.
    pub fn new(value: impl Into<String>, kind: HitKind, rank: u8, status: HitStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            status,
            value: value.into(),
            rank,
            timestamp_ms: now_ms(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.status == HitStatus::Full
    }

    /// Whether `digit` occurs anywhere in the realized value's decimal text.
    pub fn mentions_digit(&self, digit: u8) -> bool {
        digit < 10 && self.value.contains((b'0' + digit) as char)
    }
}

/// A manual correction pairing a generated value with the realized one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectificationRecord {
    pub id: Uuid,
    pub kind: HitKind,
    pub generated: String,
    pub actual: String,
    pub rank_label: String,
    pub timestamp_ms: u128,
}

impl RectificationRecord {
    pub fn new(
        generated: impl Into<String>,
        actual: impl Into<String>,
        kind: HitKind,
        rank_label: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            generated: generated.into(),
            actual: actual.into(),
            rank_label: rank_label.into(),
            timestamp_ms: now_ms(),
        }
    }
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
