//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct, which runs every flight
//! through the lookup join, coordinate sanitization and distance stages in a
//! single pass.

use crate::app::models::{EnrichedFlightRecord, Endpoint, FlightRecord};
use crate::app::services::airport_registry::AirportRegistry;
use crate::app::services::report_writer::distance_difference_nm;
use crate::config::{Config, LookupConfig};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{
    distance::great_circle_nm,
    enrichment::join_flight,
    sanitizer::sanitize,
    stats::{DropReason, DroppedFlight, ProcessingResult, ProcessingStats},
};

/// Record processor for declared flight data
///
/// Holds the registry and the settings the stages need. Processing is a pure
/// function of the input flights and the registry.
#[derive(Debug)]
pub struct RecordProcessor<'a> {
    /// Airport registry for reference lookups
    registry: &'a AirportRegistry,
    /// Not-found label settings
    lookup: LookupConfig,
    /// Sphere radius for distance computation
    earth_radius_nm: f64,
}

impl<'a> RecordProcessor<'a> {
    /// Create a new record processor
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry for O(1) airport metadata lookups
    /// * `config` - Run configuration (lookup and distance settings are used)
    pub fn new(registry: &'a AirportRegistry, config: &Config) -> Self {
        Self {
            registry,
            lookup: config.lookup.clone(),
            earth_radius_nm: config.distance.earth_radius_nm,
        }
    }

    /// Process flights through the full pipeline
    ///
    /// Output keeps the input order; dropped flights are simply absent.
    pub fn process_flights(
        &self,
        flights: Vec<FlightRecord>,
        show_progress: bool,
    ) -> ProcessingResult {
        let progress_bar = show_progress
            .then(|| Self::create_processing_progress_bar(flights.len() as u64, "Verifying"));

        let result = self.process_flights_with_progress(flights, progress_bar.as_ref());

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("{} flights verified", result.stats.final_output));
        }

        result
    }

    /// Process flights, advancing `progress_bar` by one per flight
    pub fn process_flights_with_progress(
        &self,
        flights: Vec<FlightRecord>,
        progress_bar: Option<&ProgressBar>,
    ) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.total_input = flights.len();

        info!(
            "Starting verification pipeline for {} flights",
            flights.len()
        );

        let mut records = Vec::with_capacity(flights.len());

        for flight in flights {
            match self.process_flight(flight) {
                Ok(record) => records.push(record),
                Err(dropped) => {
                    debug!(
                        "Dropping row {} ({} - {}): {}",
                        dropped.row_number,
                        dropped.departure_code,
                        dropped.arrival_code,
                        describe_drop(&dropped.reason)
                    );
                    stats.add_drop(dropped);
                }
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        stats.final_output = records.len();

        info!("{}", stats.summary());

        ProcessingResult { records, stats }
    }

    /// Run one flight through join, sanitization and distances
    pub fn process_flight(
        &self,
        flight: FlightRecord,
    ) -> std::result::Result<EnrichedFlightRecord, DroppedFlight> {
        let join = join_flight(&flight, self.registry, &self.lookup);

        let verified = [Endpoint::Departure, Endpoint::Arrival].map(|endpoint| {
            sanitize(join.coordinates(endpoint))
                .map_err(|rejection| DropReason::Coordinates { endpoint, rejection })
        });

        let [departure, arrival] = verified;
        let (verified_departure, verified_arrival) = match (departure, arrival) {
            (Ok(departure), Ok(arrival)) => (departure, arrival),
            (Err(reason), _) | (Ok(_), Err(reason)) => {
                return Err(DroppedFlight {
                    row_number: flight.row_number,
                    departure_code: flight.departure_code,
                    arrival_code: flight.arrival_code,
                    reason,
                });
            }
        };

        let declared_distance_nm = great_circle_nm(
            &flight.declared_departure,
            &flight.declared_arrival,
            self.earth_radius_nm,
        );
        let verified_distance_nm =
            great_circle_nm(&verified_departure, &verified_arrival, self.earth_radius_nm);

        Ok(EnrichedFlightRecord {
            verified_city_pair: join.verified_city_pair,
            verified_departure,
            verified_arrival,
            declared_distance_nm,
            verified_distance_nm,
            distance_difference_nm: distance_difference_nm(
                declared_distance_nm,
                verified_distance_nm,
            ),
            flight,
        })
    }

    /// Create a progress bar for the verification pass
    fn create_processing_progress_bar(total: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(message.to_string());
        pb
    }
}

fn describe_drop(reason: &DropReason) -> String {
    match reason {
        DropReason::Coordinates {
            endpoint,
            rejection,
        } => format!("{} {}", endpoint, rejection),
    }
}
