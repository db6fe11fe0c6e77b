//! Data models for flight distance verification
//!
//! This module contains the core data structures for representing airport
//! reference metadata, declared flight routes and their verified enrichment.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Coordinates
// =============================================================================

/// A point on the Earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,

    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.longitude, self.latitude)
    }
}

// =============================================================================
// Airport Reference Record
// =============================================================================

/// One row of the airport reference table
///
/// `coordinates` keeps the raw `"<lon>, <lat>"` text from the reference table.
/// A malformed value is not a load failure: it is carried through the index and
/// rejected later, which drops only the flights that depend on it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AirportRecord {
    /// IATA code, the join key
    pub code: String,

    /// Municipality the airport serves (e.g. "London")
    pub municipality: String,

    /// ISO 3166-1 alpha-2 country code (e.g. "GB")
    pub country_code: String,

    /// Raw coordinate string, longitude first
    pub coordinates: String,
}

impl AirportRecord {
    pub fn new(
        code: impl Into<String>,
        municipality: impl Into<String>,
        country_code: impl Into<String>,
        coordinates: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            municipality: municipality.into(),
            country_code: country_code.into(),
            coordinates: coordinates.into(),
        }
    }

    /// Value of a single lookup field
    pub fn field(&self, field: LookupField) -> &str {
        match field {
            LookupField::Municipality => &self.municipality,
            LookupField::CountryCode => &self.country_code,
            LookupField::Coordinates => &self.coordinates,
        }
    }
}

/// Fields retrievable from the reference index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    Municipality,
    CountryCode,
    Coordinates,
}

// =============================================================================
// Flight Records
// =============================================================================

/// One row of the declared flight table
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    /// 1-based data row number in the source file (header excluded)
    pub row_number: usize,

    /// Declared city pair text, passed through unchanged
    pub normalized_city_pair: String,

    pub departure_code: String,
    pub arrival_code: String,

    /// Declared departure position
    pub declared_departure: Coordinates,

    /// Declared arrival position
    pub declared_arrival: Coordinates,
}

/// Which end of a route a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Departure,
    Arrival,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Departure => write!(f, "departure"),
            Endpoint::Arrival => write!(f, "arrival"),
        }
    }
}

impl FlightRecord {
    /// Airport code of one endpoint
    pub fn code(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Departure => &self.departure_code,
            Endpoint::Arrival => &self.arrival_code,
        }
    }
}

/// A flight record that passed verification, with both distances
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFlightRecord {
    /// The declared record as read from the flight table
    pub flight: FlightRecord,

    /// `"{municipality}, {country} - {municipality}, {country}"`
    pub verified_city_pair: String,

    pub verified_departure: Coordinates,
    pub verified_arrival: Coordinates,

    /// Great-circle distance between the declared coordinates
    pub declared_distance_nm: f64,

    /// Great-circle distance between the verified coordinates
    pub verified_distance_nm: f64,

    /// Absolute difference between declared and verified distance
    pub distance_difference_nm: f64,
}
