//! Tests for the haversine distance engine

use crate::app::models::Coordinates;
use crate::app::services::record_processor::distance::*;

#[test]
fn test_identical_points_are_zero() {
    for &(lon, lat) in &[(0.0, 0.0), (-0.45, 51.47), (151.18, -33.95), (180.0, 90.0)] {
        assert_eq!(haversine(lon, lat, lon, lat), 0.0);
    }
}

#[test]
fn test_symmetry() {
    let pairs = [
        ((-0.45, 51.47), (-73.78, 40.64)),
        ((2.55, 49.01), (151.18, -33.95)),
        ((179.9, 0.0), (-179.9, 0.0)),
    ];

    for ((lon1, lat1), (lon2, lat2)) in pairs {
        let forward = haversine(lon1, lat1, lon2, lat2);
        let backward = haversine(lon2, lat2, lon1, lat1);
        assert!((forward - backward).abs() < 1e-9);
    }
}

#[test]
fn test_equator_to_pole_is_quarter_circumference() {
    let distance = haversine(0.0, 0.0, 0.0, 90.0);
    // 3440 * pi / 2
    assert!((distance - 5403.54).abs() < 1.0, "got {distance}");
}

#[test]
fn test_one_degree_of_latitude() {
    let distance = haversine(0.0, 0.0, 0.0, 1.0);
    assert!((distance - 60.04).abs() < 0.01, "got {distance}");
}

#[test]
fn test_antipodal_points_do_not_produce_nan() {
    let distance = haversine(0.0, 0.0, 180.0, 0.0);
    assert!(distance.is_finite());
    assert!((distance - 3440.0 * std::f64::consts::PI).abs() < 1e-6);

    let distance = haversine(-0.45, 51.47, 179.55, -51.47);
    assert!(distance.is_finite());
}

#[test]
fn test_london_to_new_york() {
    let distance = haversine(-0.461941, 51.4706, -73.7781, 40.6413);
    assert!((2990.0..3000.0).contains(&distance), "got {distance}");
}

#[test]
fn test_radius_scales_linearly() {
    let base = haversine_with_radius(10.0, 10.0, 20.0, 20.0, 1.0);
    let scaled = haversine_with_radius(10.0, 10.0, 20.0, 20.0, 3440.0);
    assert!((scaled - base * 3440.0).abs() < 1e-9);
}

#[test]
fn test_great_circle_matches_haversine() {
    let from = Coordinates::new(-0.45, 51.47);
    let to = Coordinates::new(-73.78, 40.64);
    assert_eq!(
        great_circle_nm(&from, &to, 3440.0),
        haversine(-0.45, 51.47, -73.78, 40.64)
    );
}
