//! Configuration management and validation.
//!
//! Provides the layered run configuration: built-in defaults, then an
//! optional TOML file, then environment variables, then CLI flags.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, EARTH_RADIUS_NM, ENV_DUPLICATE_CODES, ENV_EARTH_RADIUS_NM,
    ENV_NOT_FOUND_LABEL, default_not_found_label,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// How repeated airport codes in the reference table are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCodePolicy {
    /// Keep the first row for a code, warn about the rest
    #[default]
    FirstWins,
    /// Abort loading on the first repeated code
    Reject,
}

impl FromStr for DuplicateCodePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_wins" | "first-wins" | "first" => Ok(Self::FirstWins),
            "reject" | "error" => Ok(Self::Reject),
            other => Err(Error::configuration(format!(
                "Unknown duplicate code policy '{}'. Expected 'first_wins' or 'reject'",
                other
            ))),
        }
    }
}

/// Reference lookup settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Fixed label used when an airport code is not found. When unset, the
    /// label is `"<code>" not found!`.
    pub not_found_label: Option<String>,

    /// Handling of repeated codes in the reference table
    pub duplicate_codes: DuplicateCodePolicy,
}

impl LookupConfig {
    /// Label substituted for a code that is not in the reference table
    pub fn not_found_label_for(&self, code: &str) -> String {
        match &self.not_found_label {
            Some(label) => label.clone(),
            None => default_not_found_label(code),
        }
    }
}

/// Distance engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Spherical Earth radius in nautical miles
    pub earth_radius_nm: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            earth_radius_nm: EARTH_RADIUS_NM,
        }
    }
}

/// Flight table input settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Abort on a non-numeric declared coordinate instead of dropping the row
    pub strict_declared_coordinates: bool,
}

/// Output table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix the output file with a UTF-8 byte-order mark
    pub write_bom: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { write_bom: true }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub distance: DistanceConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Default config file location (`<config dir>/flight-distance/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Parse configuration from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e: toml::de::Error| {
            Error::configuration(format!("Config file '{}': {}", path.display(), e))
        })
    }

    /// Load configuration with layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(label) = var(ENV_NOT_FOUND_LABEL) {
            debug!("{} overrides not-found label", ENV_NOT_FOUND_LABEL);
            self.lookup.not_found_label = Some(label);
        }

        if let Some(policy) = var(ENV_DUPLICATE_CODES) {
            self.lookup.duplicate_codes = policy.parse()?;
        }

        if let Some(radius) = var(ENV_EARTH_RADIUS_NM) {
            self.distance.earth_radius_nm = radius.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a number, got '{}'",
                    ENV_EARTH_RADIUS_NM, radius
                ))
            })?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let radius = self.distance.earth_radius_nm;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::configuration(format!(
                "Earth radius must be a positive number of nautical miles, got {}",
                radius
            )));
        }

        Ok(())
    }
}
