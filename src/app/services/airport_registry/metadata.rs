//! Airport registry load statistics
//!
//! This module defines the data structures for tracking how the reference
//! table was indexed.

/// Statistics about building the airport registry
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Number of reference rows read
    pub total_records: usize,

    /// Number of airports placed in the index
    pub airports_indexed: usize,

    /// Rows skipped because the code was empty
    pub records_without_code: usize,

    /// Rows skipped because the code was already indexed
    pub duplicate_codes: usize,

    /// Time taken to build the registry
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            airports_indexed: 0,
            records_without_code: 0,
            duplicate_codes: 0,
            load_duration: std::time::Duration::ZERO,
        }
    }

    /// Rows read but not indexed
    pub fn records_skipped(&self) -> usize {
        self.records_without_code + self.duplicate_codes
    }

    /// Calculate the skip rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_skipped() as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Read {} reference rows, indexed {} airports ({} without code, {} duplicates, {:.1}% skipped) in {:.2}s",
            self.total_records,
            self.airports_indexed,
            self.records_without_code,
            self.duplicate_codes,
            self.skip_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
