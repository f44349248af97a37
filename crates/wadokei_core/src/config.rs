//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! latitude_deg = 35.689506
//! longitude_deg = 139.6917
//! format = "%T・%s%bノ%m刻"
//! cache_capacity = 6
//! ```
//!
//! Every field is optional and falls back to the Tokyo defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wadokei_sun::{DEFAULT_CACHE_CAPACITY, DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, Location};

use crate::error::WadokeiError;
use crate::format::DEFAULT_FORMAT;

/// Location, output template and cache size for a [`crate::Wadokei`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WadokeiConfig {
    #[serde(default = "default_latitude")]
    pub latitude_deg: f64,
    #[serde(default = "default_longitude")]
    pub longitude_deg: f64,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE_DEG
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE_DEG
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for WadokeiConfig {
    fn default() -> Self {
        Self {
            latitude_deg: default_latitude(),
            longitude_deg: default_longitude(),
            format: default_format(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl WadokeiConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, WadokeiError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WadokeiError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WadokeiError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, WadokeiError> {
        toml::to_string(self)
            .map_err(|e| WadokeiError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> Result<(), WadokeiError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(WadokeiError::Config(
                "latitude_deg must be within [-90, 90]".to_string(),
            ));
        }
        if !self.longitude_deg.is_finite() {
            return Err(WadokeiError::Config(
                "longitude_deg must be finite".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(WadokeiError::Config(
                "cache_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured location, longitude normalized.
    pub fn location(&self) -> Result<Location, WadokeiError> {
        Ok(Location::new(self.latitude_deg, self.longitude_deg)?)
    }
}
