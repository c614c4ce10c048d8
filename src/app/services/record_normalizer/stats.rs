//! Normalization statistics and result structures
//!
//! Tracks how many raw records became markers and why the rest did not.

use serde::Serialize;

/// Normalized markers with the statistics of the pass that produced them
#[derive(Debug, Clone)]
pub struct NormalizeResult<T> {
    /// Markers in source row order
    pub markers: Vec<T>,

    pub stats: NormalizeStats,
}

impl<T> NormalizeResult<T> {
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Per-dataset normalization statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizeStats {
    /// Raw records offered to the transform
    pub total_records: usize,

    /// Markers produced
    pub markers_produced: usize,

    /// Records without a latitude or longitude field
    pub missing_coordinates: usize,

    /// Records whose coordinate text could not be parsed
    pub unparseable_coordinates: usize,

    /// Messages describing rejected records, for debugging
    pub errors: Vec<String>,
}

impl NormalizeStats {
    pub fn new(total_records: usize) -> Self {
        Self {
            total_records,
            ..Default::default()
        }
    }

    /// Records that did not become markers
    pub fn records_skipped(&self) -> usize {
        self.missing_coordinates + self.unparseable_coordinates
    }

    /// Record a rejected coordinate with context
    pub fn add_unparseable(&mut self, message: String) {
        self.unparseable_coordinates += 1;
        self.errors.push(message);
    }

    /// Percentage of records that became markers
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            100.0
        } else {
            (self.markers_produced as f64 / self.total_records as f64) * 100.0
        }
    }
}
