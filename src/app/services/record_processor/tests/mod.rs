//! Tests for the record processor module
//!
//! Unit tests for the join, sanitizer and distance stages plus the pipeline.

pub mod distance_tests;
pub mod enrichment_tests;
pub mod sanitizer_tests;

// Test helper functions and fixtures
use crate::app::models::{AirportRecord, Coordinates, FlightRecord};
use crate::app::services::airport_registry::AirportRegistry;
use crate::config::DuplicateCodePolicy;

/// Registry with real-world airport positions plus one broken row
pub fn create_test_registry() -> AirportRegistry {
    let airports = vec![
        AirportRecord::new("LHR", "London", "GB", "-0.461941, 51.4706"),
        AirportRecord::new("JFK", "New York", "US", "-73.7781, 40.6413"),
        AirportRecord::new("CDG", "Paris", "FR", "2.55, 49.012798"),
        AirportRecord::new("BAD", "Nowhere", "ZZ", "abc, def"),
        AirportRecord::new("HLF", "Halfway", "ZZ", "12.5"),
    ];

    let (registry, _) = AirportRegistry::build(airports, DuplicateCodePolicy::FirstWins).unwrap();
    registry
}

/// Create a flight with declared coordinates given as (lat, lon) like the input table
pub fn create_test_flight(
    row_number: usize,
    departure_code: &str,
    arrival_code: &str,
    departure: (f64, f64),
    arrival: (f64, f64),
) -> FlightRecord {
    FlightRecord {
        row_number,
        normalized_city_pair: format!("{} - {}", departure_code, arrival_code),
        departure_code: departure_code.to_string(),
        arrival_code: arrival_code.to_string(),
        declared_departure: Coordinates::new(departure.1, departure.0),
        declared_arrival: Coordinates::new(arrival.1, arrival.0),
    }
}

/// LHR -> JFK as declared in a typical flight table
pub fn lhr_jfk(row_number: usize) -> FlightRecord {
    create_test_flight(row_number, "LHR", "JFK", (51.47, -0.45), (40.64, -73.78))
}
