//! Header-driven column mapping shared by the table loaders
//!
//! Both input tables are addressed by column name rather than position, so
//! extra columns and any column order are accepted. Header cells are compared
//! after stripping a leading byte-order mark and surrounding whitespace.

use crate::constants::normalize_header;
use crate::{Error, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Column name to index mapping for one CSV header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build the mapping from a header record
    ///
    /// When a name appears twice the first column keeps the name.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index
                .entry(normalize_header(header).to_string())
                .or_insert(index);
        }

        ColumnMapping { name_to_index }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Fail with `MissingColumn` for the first required column not present
    pub fn require(&self, file: &Path, required: &[&str]) -> Result<()> {
        match required.iter().find(|column| !self.has_column(column)) {
            Some(column) => Err(Error::missing_column(
                file.display().to_string(),
                column.to_string(),
            )),
            None => Ok(()),
        }
    }

    /// Field value by column name; short rows yield an empty string
    pub fn field<'r>(&self, record: &'r StringRecord, column_name: &str) -> &'r str {
        self.get_index(column_name)
            .and_then(|index| record.get(index))
            .unwrap_or("")
    }
}

/// Open a headed CSV file, mapping a missing file to `FileNotFound`
pub fn open_csv_reader(path: &Path) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    debug!("Opening CSV table: {}", path.display());

    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Allow records with varying length
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to open CSV file".to_string(),
                Some(e),
            )
        })
}

/// Read the header row of an open reader and check the required columns
pub fn read_column_mapping(
    reader: &mut Reader<File>,
    path: &Path,
    required: &[&str],
) -> Result<ColumnMapping> {
    let headers = reader.headers().map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "Failed to read CSV header".to_string(),
            Some(e),
        )
    })?;

    let mapping = ColumnMapping::analyze(headers);
    mapping.require(path, required)?;
    Ok(mapping)
}
