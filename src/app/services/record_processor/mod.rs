//! Record processing module for flight verification
//!
//! This module turns declared flight records into verified, distance-checked
//! records. It joins each flight against the airport registry, drops records
//! whose verified coordinates cannot be parsed, and computes both great-circle
//! distances.
//!
//! # Architecture
//!
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`enrichment`] - Lookup join against the airport registry
//! - [`sanitizer`] - Coordinate string parsing and the row filter
//! - [`distance`] - Haversine great-circle distance
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! Each flight passes through four stages in input order:
//!
//! 1. **Lookup Join**: verified city labels and raw verified coordinates
//! 2. **Sanitization**: departure then arrival coordinates must parse as finite numbers
//! 3. **Distances**: declared and verified great-circle distance in nautical miles
//! 4. **Difference**: absolute difference between the two distances
//!
//! A record that fails stage 2 is dropped and counted; it never reaches the output.
//!
//! # Example Usage
//!
//! ```rust
//! use flight_distance::app::services::airport_registry::AirportRegistry;
//! use flight_distance::app::services::record_processor::RecordProcessor;
//! use flight_distance::config::{Config, DuplicateCodePolicy};
//! use flight_distance::AirportRecord;
//!
//! # fn example(flights: Vec<flight_distance::FlightRecord>) -> flight_distance::Result<()> {
//! let airports = vec![AirportRecord::new("LHR", "London", "GB", "-0.461941, 51.4706")];
//! let (registry, _) = AirportRegistry::build(airports, DuplicateCodePolicy::FirstWins)?;
//!
//! let processor = RecordProcessor::new(&registry, &Config::default());
//! let result = processor.process_flights(flights, false);
//!
//! println!("{}", result.stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod distance;
pub mod enrichment;
pub mod processor;
pub mod sanitizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use distance::{great_circle_nm, haversine, haversine_with_radius};
pub use enrichment::{LookupJoin, join_flight};
pub use processor::RecordProcessor;
pub use sanitizer::{CoordinateRejection, parse_coordinate_pair};
pub use stats::{DropReason, DroppedFlight, ProcessingResult, ProcessingStats};
