//! Bounded archive of historical draw records.
//!
//! The archive keeps the most recent records first and evicts the oldest
//! once capacity is reached. The engine reads it as a frozen snapshot during
//! a generation cycle; the calling application owns its lifecycle.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::data::sequence::{DataSet, Sequence};

/// Default number of draw records retained.
pub const DEFAULT_ARCHIVE_CAPACITY: usize = 250;

/// Ordered, capacity-bounded collection of [`DataSet`] records, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawArchive {
    sets: VecDeque<DataSet>,
    capacity: usize,
}

impl DrawArchive {
    /// Archive with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARCHIVE_CAPACITY)
    }

    /// Archive bounded at `capacity` records (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sets: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a new draw at the front, evicting the oldest past capacity.
    pub fn record(&mut self, set: DataSet) {
        self.sets.push_front(set);
        self.sets.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &DataSet> {
        self.sets.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DataSet> {
        self.sets.get(index)
    }

    /// Remove one record by position (0 = newest).
    pub fn remove(&mut self, index: usize) -> Option<DataSet> {
        self.sets.remove(index)
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    /// Every row of every record, flattened in archive order.
    pub fn rows(&self) -> impl Iterator<Item = &Sequence> {
        self.sets.iter().flat_map(|set| set.rows().iter())
    }
}

impl Default for DrawArchive {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(first_digit: u8) -> DataSet {
        let mut rows: Vec<Sequence> = (0..6).map(|_| vec![first_digit, 0, 0, 0]).collect();
        rows.push(vec![first_digit, 0, 0]);
        DataSet::from_rows(rows)
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut archive = DrawArchive::new();
        archive.record(set_of(1));
        archive.record(set_of(2));

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.get(0), Some(&set_of(2)));
        assert_eq!(archive.get(1), Some(&set_of(1)));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut archive = DrawArchive::with_capacity(3);
        for digit in 0..5 {
            archive.record(set_of(digit));
        }

        assert_eq!(archive.len(), 3);
        assert_eq!(archive.get(0), Some(&set_of(4)));
        assert_eq!(archive.get(2), Some(&set_of(2)));
    }

    #[test]
    fn test_zero_capacity_clamped_to_one() {
        let mut archive = DrawArchive::with_capacity(0);
        archive.record(set_of(1));
        archive.record(set_of(2));
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.get(0), Some(&set_of(2)));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut archive = DrawArchive::new();
        archive.record(set_of(1));
        archive.record(set_of(2));

        let removed = archive.remove(0);
        assert_eq!(removed, Some(set_of(2)));
        assert_eq!(archive.len(), 1);

        archive.clear();
        assert!(archive.is_empty());
    }

    #[test]
    fn test_rows_flatten_in_archive_order() {
        let mut archive = DrawArchive::new();
        archive.record(set_of(1));
        archive.record(set_of(2));

        let rows: Vec<&Sequence> = archive.rows().collect();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[0][0], 2);
        assert_eq!(rows[7][0], 1);
    }
}
