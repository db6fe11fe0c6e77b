//! Tests for the lookup join

use super::*;
use crate::app::models::Endpoint;
use crate::app::services::record_processor::enrichment::*;
use crate::config::LookupConfig;

#[test]
fn test_join_found_airports() {
    let registry = create_test_registry();
    let flight = lhr_jfk(1);

    let join = join_flight(&flight, &registry, &LookupConfig::default());

    assert_eq!(join.verified_city_pair, "London, GB - New York, US");
    assert_eq!(join.departure_coordinates, Some("-0.461941, 51.4706"));
    assert_eq!(join.arrival_coordinates, Some("-73.7781, 40.6413"));
    assert_eq!(
        join.coordinates(Endpoint::Arrival),
        Some("-73.7781, 40.6413")
    );
}

#[test]
fn test_join_missing_airport_uses_default_label() {
    let registry = create_test_registry();
    let flight = create_test_flight(1, "LHR", "XYZ", (51.47, -0.45), (10.0, 10.0));

    let join = join_flight(&flight, &registry, &LookupConfig::default());

    assert_eq!(
        join.verified_city_pair,
        "London, GB - \"XYZ\" not found!, \"XYZ\" not found!"
    );
    assert_eq!(join.arrival_coordinates, None);
    assert!(join.departure_coordinates.is_some());
}

#[test]
fn test_join_missing_airport_uses_configured_label() {
    let registry = create_test_registry();
    let flight = create_test_flight(1, "QQQ", "CDG", (0.0, 0.0), (49.0, 2.5));
    let lookup = LookupConfig {
        not_found_label: Some("unknown".to_string()),
        ..Default::default()
    };

    let join = join_flight(&flight, &registry, &lookup);

    assert_eq!(join.verified_city_pair, "unknown, unknown - Paris, FR");
    assert_eq!(join.departure_coordinates, None);
}

#[test]
fn test_endpoint_label() {
    let registry = create_test_registry();
    let flight = lhr_jfk(1);
    let lookup = LookupConfig::default();

    assert_eq!(
        endpoint_label(&flight, Endpoint::Departure, &registry, &lookup),
        "London, GB"
    );
    assert_eq!(
        endpoint_label(&flight, Endpoint::Arrival, &registry, &lookup),
        "New York, US"
    );
}

#[test]
fn test_join_malformed_coordinates_pass_through_raw() {
    let registry = create_test_registry();
    let flight = create_test_flight(1, "BAD", "LHR", (0.0, 0.0), (51.47, -0.45));

    let join = join_flight(&flight, &registry, &LookupConfig::default());

    assert_eq!(join.verified_city_pair, "Nowhere, ZZ - London, GB");
    assert_eq!(join.departure_coordinates, Some("abc, def"));
}
