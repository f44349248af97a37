//! Error types for the solar ephemeris.

use thiserror::Error;
use wadokei_time::Instant;

use crate::types::SolarEventKind;

/// Errors from sunrise/sunset computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SunError {
    /// The hour-angle equation has no real solution: polar day or night.
    #[error("no {kind} on the solar day starting {day_start}")]
    NoSunEvent {
        kind: SolarEventKind,
        day_start: Instant,
    },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Fixed-point refinement did not settle within the iteration cap.
    #[error("no convergence for {kind} on the solar day starting {day_start}")]
    NoConvergence {
        kind: SolarEventKind,
        day_start: Instant,
    },
}
