//! Solar ephemeris for the unequal-hour clock.
//!
//! This crate provides:
//! - An iterative sunrise/sunset/transit solver ([`solve_event`])
//! - [`SolarCalculator`], binding the solver to a [`Location`] and a
//!   bounded FIFO [`EventCache`]
//!
//! Events are keyed by the UTC day of the (longitude-shifted) query
//! instant; see [`SolarCalculator::shift`].

pub mod cache;
pub mod error;
pub mod solar;
pub mod types;

pub use cache::{CacheKey, CacheStats, DEFAULT_CACHE_CAPACITY, EventCache};
pub use error::SunError;
pub use solar::{CONVERGENCE_MINUTES, MAX_ITERATIONS, SolarCalculator, solve_event};
pub use types::{
    DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, Location, SolarEventKind, normalize_longitude,
};
