//! Processing statistics and result structures for the verification pipeline
//!
//! This module provides types for tracking how many flights survived each
//! stage and which rows were dropped, and for carrying the verified records
//! on to the report writer.

use super::sanitizer::CoordinateRejection;
use crate::app::models::{EnrichedFlightRecord, Endpoint};

/// Why a flight did not reach the output
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    /// Verified coordinates for an endpoint were absent or malformed
    Coordinates {
        endpoint: Endpoint,
        rejection: CoordinateRejection,
    },
}

/// A flight removed by the sanitizer
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedFlight {
    pub row_number: usize,
    pub departure_code: String,
    pub arrival_code: String,
    pub reason: DropReason,
}

/// Statistics for record processing operations
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Total number of input flights
    pub total_input: usize,
    /// Flights whose airport code (either end) was not in the registry
    pub not_found: usize,
    /// Flights whose reference coordinates did not parse
    pub malformed_coordinates: usize,
    /// Final number of verified output records
    pub final_output: usize,
    /// Per-row detail of every dropped flight
    pub dropped: Vec<DroppedFlight>,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            not_found: 0,
            malformed_coordinates: 0,
            final_output: 0,
            dropped: Vec::new(),
        }
    }

    /// Record a dropped flight and bump the matching counter
    pub fn add_drop(&mut self, dropped: DroppedFlight) {
        match &dropped.reason {
            DropReason::Coordinates {
                rejection: CoordinateRejection::NotFound,
                ..
            } => self.not_found += 1,
            DropReason::Coordinates { .. } => self.malformed_coordinates += 1,
        }
        self.dropped.push(dropped);
    }

    /// Number of flights filtered out
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Get summary of processing pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Verification Summary: {} -> {} flights ({:.1}% verified) | \
             Not found: {} | Malformed coordinates: {}",
            self.total_input,
            self.final_output,
            self.success_rate(),
            self.not_found,
            self.malformed_coordinates
        )
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of record processing operations
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Verified flights in input order
    pub records: Vec<EnrichedFlightRecord>,
    /// Processing statistics and drop details
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// True when every input flight was dropped
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest distance discrepancy among the verified flights
    pub fn max_difference(&self) -> Option<&EnrichedFlightRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.distance_difference_nm.total_cmp(&b.distance_difference_nm))
    }

    /// Mean distance discrepancy in nautical miles
    pub fn mean_difference_nm(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.records
                .iter()
                .map(|r| r.distance_difference_nm)
                .sum::<f64>()
                / self.records.len() as f64
        }
    }
}
