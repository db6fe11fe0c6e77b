//! Flight Distance Library
//!
//! A Rust library for reconciling declared flight-route data against an
//! authoritative airport reference table and cross-checking route distances.
//!
//! This library provides tools for:
//! - Loading an airport reference table and indexing it by IATA code for O(1) lookups
//! - Enriching flight records with verified city/country labels and coordinates
//! - Filtering out records whose verified coordinates cannot be parsed
//! - Computing great-circle distances in nautical miles (haversine)
//! - Writing the augmented table as UTF-8 CSV with a byte-order mark

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod airport_registry;
        pub mod column_mapping;
        pub mod flight_table;
        pub mod record_processor;
        pub mod report_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AirportRecord, Coordinates, EnrichedFlightRecord, FlightRecord};
pub use config::Config;

/// Result type alias for the flight distance verifier
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flight distance verification
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required column is absent from an input table
    #[error("Missing required column '{column}' in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// The reference table holds the same airport code more than once
    #[error("Duplicate airport code '{code}' in reference table (rows {first_row} and {duplicate_row})")]
    DuplicateAirportCode {
        code: String,
        first_row: usize,
        duplicate_row: usize,
    },

    /// A declared coordinate in the flight table is not a number
    #[error("Invalid declared coordinate in file '{file}', row {row}, column '{column}': '{value}'")]
    InvalidDeclaredCoordinate {
        file: String,
        row: usize,
        column: String,
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Every flight row was filtered out
    #[error("No flight rows survived verification ({input_rows} input rows, all dropped)")]
    EmptyResult { input_rows: usize },

    /// Run report could not be rendered
    #[error("Report error: {message}")]
    Report { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a duplicate airport code error
    pub fn duplicate_airport_code(
        code: impl Into<String>,
        first_row: usize,
        duplicate_row: usize,
    ) -> Self {
        Self::DuplicateAirportCode {
            code: code.into(),
            first_row,
            duplicate_row,
        }
    }

    /// Create an invalid declared coordinate error
    pub fn invalid_declared_coordinate(
        file: impl Into<String>,
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidDeclaredCoordinate {
            file: file.into(),
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an empty result error
    pub fn empty_result(input_rows: usize) -> Self {
        Self::EmptyResult { input_rows }
    }

    /// Create a report rendering error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    ///
    /// An empty result set is distinguished from fatal failures so that
    /// callers can tell "nothing matched" apart from "could not run".
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyResult { .. } => 2,
            _ => 1,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML: {}", error),
        }
    }
}
