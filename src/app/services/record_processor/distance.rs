//! Great-circle distance on a spherical Earth
//!
//! Haversine formula over decimal-degree inputs, result in nautical miles.

use crate::app::models::Coordinates;
use crate::constants::EARTH_RADIUS_NM;

/// Great-circle distance in nautical miles using the standard radius
///
/// Argument order is longitude before latitude for each point.
pub fn haversine(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    haversine_with_radius(lon1, lat1, lon2, lat2, EARTH_RADIUS_NM)
}

/// Great-circle distance for an explicit sphere radius
///
/// The haversine term is clamped to `[0, 1]` before the square root so that
/// rounding near identical or antipodal points cannot produce `NaN`.
pub fn haversine_with_radius(lon1: f64, lat1: f64, lon2: f64, lat2: f64, radius: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    radius * central_angle
}

/// Distance between two typed points
pub fn great_circle_nm(from: &Coordinates, to: &Coordinates, radius: f64) -> f64 {
    haversine_with_radius(
        from.longitude,
        from.latitude,
        to.longitude,
        to.latitude,
        radius,
    )
}
