//! Coordinate sanitization
//!
//! Verified coordinates arrive as the reference table's `"<lon>, <lat>"` text,
//! or not at all when the airport is unknown. Anything that does not parse to
//! two finite numbers removes the owning flight from further processing.

use crate::app::models::Coordinates;
use std::fmt;

/// Why a verified coordinate string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateRejection {
    /// The airport code is not in the reference table
    NotFound,
    /// No comma separating longitude from latitude
    MissingSeparator { raw: String },
    /// The longitude half is not a finite number
    InvalidLongitude { raw: String },
    /// The latitude half is not a finite number
    InvalidLatitude { raw: String },
}

impl fmt::Display for CoordinateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "airport not found"),
            Self::MissingSeparator { raw } => {
                write!(f, "malformed coordinates '{}': no separator", raw)
            }
            Self::InvalidLongitude { raw } => {
                write!(f, "malformed coordinates '{}': bad longitude", raw)
            }
            Self::InvalidLatitude { raw } => {
                write!(f, "malformed coordinates '{}': bad latitude", raw)
            }
        }
    }
}

/// Parse `"<lon>, <lat>"` into coordinates
///
/// Splits on the first comma and trims both halves. Longitude is checked
/// before latitude.
pub fn parse_coordinate_pair(raw: &str) -> Result<Coordinates, CoordinateRejection> {
    let Some((lon_text, lat_text)) = raw.split_once(',') else {
        return Err(CoordinateRejection::MissingSeparator {
            raw: raw.to_string(),
        });
    };

    let longitude = parse_finite(lon_text).ok_or_else(|| CoordinateRejection::InvalidLongitude {
        raw: raw.to_string(),
    })?;
    let latitude = parse_finite(lat_text).ok_or_else(|| CoordinateRejection::InvalidLatitude {
        raw: raw.to_string(),
    })?;

    Ok(Coordinates::new(longitude, latitude))
}

/// Sanitize an optional verified coordinate string
pub fn sanitize(raw: Option<&str>) -> Result<Coordinates, CoordinateRejection> {
    match raw {
        Some(raw) => parse_coordinate_pair(raw),
        None => Err(CoordinateRejection::NotFound),
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
