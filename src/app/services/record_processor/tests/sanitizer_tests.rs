//! Tests for coordinate string sanitization

use crate::app::models::Coordinates;
use crate::app::services::record_processor::sanitizer::*;

#[test]
fn test_parse_well_formed_pair() {
    assert_eq!(
        parse_coordinate_pair("-0.461941, 51.4706").unwrap(),
        Coordinates::new(-0.461941, 51.4706)
    );
    assert_eq!(
        parse_coordinate_pair("2.55,49.012798").unwrap(),
        Coordinates::new(2.55, 49.012798)
    );
    assert_eq!(
        parse_coordinate_pair("  10 ,  -20  ").unwrap(),
        Coordinates::new(10.0, -20.0)
    );
}

#[test]
fn test_split_on_first_comma_only() {
    // The latitude half keeps the trailing comma and fails to parse
    let result = parse_coordinate_pair("1.0, 2.0, 3.0");
    assert!(matches!(
        result,
        Err(CoordinateRejection::InvalidLatitude { .. })
    ));
}

#[test]
fn test_non_numeric_halves() {
    assert!(matches!(
        parse_coordinate_pair("abc, def"),
        Err(CoordinateRejection::InvalidLongitude { .. })
    ));
    assert!(matches!(
        parse_coordinate_pair("1.5, def"),
        Err(CoordinateRejection::InvalidLatitude { .. })
    ));
    assert!(matches!(
        parse_coordinate_pair(", 51.0"),
        Err(CoordinateRejection::InvalidLongitude { .. })
    ));
}

#[test]
fn test_missing_separator() {
    assert!(matches!(
        parse_coordinate_pair("12.5"),
        Err(CoordinateRejection::MissingSeparator { .. })
    ));
    assert!(matches!(
        parse_coordinate_pair(""),
        Err(CoordinateRejection::MissingSeparator { .. })
    ));
}

#[test]
fn test_non_finite_values_rejected() {
    assert!(parse_coordinate_pair("NaN, 10").is_err());
    assert!(parse_coordinate_pair("10, inf").is_err());
    assert!(parse_coordinate_pair("-infinity, 0").is_err());
}

#[test]
fn test_sanitize_absent_value() {
    assert_eq!(sanitize(None), Err(CoordinateRejection::NotFound));
    assert_eq!(
        sanitize(Some("-73.7781, 40.6413")),
        Ok(Coordinates::new(-73.7781, 40.6413))
    );
}

#[test]
fn test_rejection_display() {
    assert_eq!(CoordinateRejection::NotFound.to_string(), "airport not found");
    assert_eq!(
        CoordinateRejection::InvalidLongitude {
            raw: "abc, def".to_string()
        }
        .to_string(),
        "malformed coordinates 'abc, def': bad longitude"
    );
}
