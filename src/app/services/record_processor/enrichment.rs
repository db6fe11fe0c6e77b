//! Lookup join of flight records against the airport registry
//!
//! Produces the verified city pair label and the raw verified coordinate
//! strings for both endpoints. Labels are always built, even when a lookup
//! misses: the not-found label simply takes the missing part's place.

use crate::app::models::{Endpoint, FlightRecord, LookupField};
use crate::app::services::airport_registry::AirportRegistry;
use crate::config::LookupConfig;
use tracing::trace;

/// Result of joining one flight with the reference table
#[derive(Debug, Clone, PartialEq)]
pub struct LookupJoin<'a> {
    /// `"{dep municipality}, {dep country} - {arr municipality}, {arr country}"`
    pub verified_city_pair: String,

    /// Raw reference coordinates of the departure airport, if found
    pub departure_coordinates: Option<&'a str>,

    /// Raw reference coordinates of the arrival airport, if found
    pub arrival_coordinates: Option<&'a str>,
}

impl<'a> LookupJoin<'a> {
    /// Raw coordinates of one endpoint
    pub fn coordinates(&self, endpoint: Endpoint) -> Option<&'a str> {
        match endpoint {
            Endpoint::Departure => self.departure_coordinates,
            Endpoint::Arrival => self.arrival_coordinates,
        }
    }
}

/// Join a flight with the registry
pub fn join_flight<'a>(
    flight: &FlightRecord,
    registry: &'a AirportRegistry,
    lookup: &LookupConfig,
) -> LookupJoin<'a> {
    let departure_label = endpoint_label(flight, Endpoint::Departure, registry, lookup);
    let arrival_label = endpoint_label(flight, Endpoint::Arrival, registry, lookup);

    let join = LookupJoin {
        verified_city_pair: format!("{} - {}", departure_label, arrival_label),
        departure_coordinates: registry.lookup(&flight.departure_code, LookupField::Coordinates),
        arrival_coordinates: registry.lookup(&flight.arrival_code, LookupField::Coordinates),
    };

    trace!(
        "Row {}: {} -> {}",
        flight.row_number, flight.normalized_city_pair, join.verified_city_pair
    );

    join
}

/// `"{municipality}, {country_code}"` for one endpoint
///
/// Each part falls back to the not-found label on its own.
pub fn endpoint_label(
    flight: &FlightRecord,
    endpoint: Endpoint,
    registry: &AirportRegistry,
    lookup: &LookupConfig,
) -> String {
    let code = flight.code(endpoint);
    let part = |field: LookupField| -> String {
        match registry.lookup(code, field) {
            Some(value) => value.to_string(),
            None => lookup.not_found_label_for(code),
        }
    };

    format!(
        "{}, {}",
        part(LookupField::Municipality),
        part(LookupField::CountryCode)
    )
}
