//! Instants and UTC calendar conversions.
//!
//! This crate provides:
//! - [`Instant`], integer milliseconds since the Unix epoch
//! - Julian Date <-> calendar conversions
//! - [`UtcTime`], a parseable/displayable UTC calendar form

pub mod error;
pub mod instant;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, MILLIS_PER_DAY, MILLIS_PER_MINUTE, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_unix_millis, unix_millis_to_jd,
};
pub use utc_time::UtcTime;
