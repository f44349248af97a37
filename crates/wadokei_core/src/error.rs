//! Error types for the wadokei engine.

use thiserror::Error;
use wadokei_sun::SunError;
use wadokei_time::{Instant, TimeError};

/// Errors surfaced by the engine facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WadokeiError {
    /// Sunrise/sunset could not be solved, or the location is invalid.
    #[error(transparent)]
    Sun(#[from] SunError),
    /// Timestamp parsing or calendar validation failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Configuration could not be parsed or failed validation.
    #[error("invalid config: {0}")]
    Config(String),
    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Stem lookup did not reach a pre-dawn segment within the hop limit.
    #[error("stem did not resolve to a pre-dawn segment from {instant}")]
    StemUnresolved { instant: Instant },
}

impl WadokeiError {
    /// Whether this is polar day/night at the configured latitude.
    pub fn is_no_sun_event(&self) -> bool {
        matches!(self, Self::Sun(SunError::NoSunEvent { .. }))
    }
}
