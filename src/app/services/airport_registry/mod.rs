//! Airport registry service for O(1) airport metadata lookups
//!
//! This module provides the reference index used to verify flight records. It
//! is built once from the airport reference table and answers per-field lookups
//! by exact IATA code.

use crate::app::models::{AirportRecord, LookupField};
use crate::config::DuplicateCodePolicy;
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::Instant;
use tracing::{debug, info, warn};

pub mod loader;
pub mod metadata;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;

/// Airport registry providing O(1) airport metadata lookups
///
/// Codes are matched by exact string equality. When the reference table holds
/// a code more than once, the first occurrence is the one indexed (unless the
/// registry was built with [`DuplicateCodePolicy::Reject`]).
#[derive(Debug, Clone)]
pub struct AirportRegistry {
    /// Airport metadata indexed by IATA code
    pub(crate) airports: HashMap<String, AirportRecord>,

    /// Reference table row each indexed airport came from
    pub(crate) source_rows: HashMap<String, usize>,
}

impl AirportRegistry {
    /// Create a new empty airport registry
    pub fn new() -> Self {
        Self {
            airports: HashMap::new(),
            source_rows: HashMap::new(),
        }
    }

    /// Build the index from reference rows in table order
    ///
    /// Rows with an empty code are skipped: they can never match a flight.
    ///
    /// # Errors
    /// * Returns `Error::DuplicateAirportCode` for a repeated code under
    ///   [`DuplicateCodePolicy::Reject`]
    pub fn build<I>(rows: I, policy: DuplicateCodePolicy) -> Result<(Self, LoadStats)>
    where
        I: IntoIterator<Item = AirportRecord>,
    {
        let start_time = Instant::now();
        let mut registry = Self::new();
        let mut stats = LoadStats::new();

        for (index, airport) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            stats.total_records += 1;

            if airport.code.is_empty() {
                stats.records_without_code += 1;
                continue;
            }

            match registry.airports.entry(airport.code.clone()) {
                Entry::Vacant(e) => {
                    registry.source_rows.insert(airport.code.clone(), row_number);
                    e.insert(airport);
                    stats.airports_indexed += 1;
                }
                Entry::Occupied(e) => {
                    let first_row = registry
                        .source_rows
                        .get(e.key())
                        .copied()
                        .unwrap_or_default();

                    match policy {
                        DuplicateCodePolicy::Reject => {
                            return Err(Error::duplicate_airport_code(
                                airport.code,
                                first_row,
                                row_number,
                            ));
                        }
                        DuplicateCodePolicy::FirstWins => {
                            warn!(
                                "Duplicate airport code '{}' at row {} (first seen at row {}), keeping first",
                                airport.code, row_number, first_row
                            );
                            stats.duplicate_codes += 1;
                        }
                    }
                }
            }
        }

        stats.load_duration = start_time.elapsed();

        debug!("{}", stats.summary());
        info!(
            "Airport registry built: {} airports from {} rows",
            stats.airports_indexed, stats.total_records
        );

        Ok((registry, stats))
    }

    /// Look up one field of an airport by code
    ///
    /// Returns `None` when the code is not in the reference table. Absence is
    /// an expected condition (feeder airports), not a failure.
    pub fn lookup(&self, code: &str, field: LookupField) -> Option<&str> {
        self.airports.get(code).map(|airport| airport.field(field))
    }

    /// Get the total number of airports in the registry
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }
}

impl Default for AirportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
