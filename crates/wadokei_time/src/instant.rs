//! Absolute instants as integer milliseconds since the Unix epoch.

use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::julian::{MILLIS_PER_DAY, MILLIS_PER_MINUTE};
use crate::utc_time::UtcTime;

/// An absolute UTC instant, milliseconds since 1970-01-01T00:00:00Z.
///
/// This is the only time type the engine passes around; it carries no
/// calendar or locale information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// Create an instant from Unix milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Current instant from the system clock.
    ///
    /// A clock set before 1970 yields a negative instant.
    pub fn now() -> Self {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as i64,
            Err(e) => -(e.duration().as_millis() as i64),
        };
        Self { millis }
    }

    /// Unix milliseconds.
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Milliseconds elapsed since the start of the UTC day.
    pub const fn time_of_day_ms(self) -> i64 {
        self.millis.rem_euclid(MILLIS_PER_DAY)
    }

    /// The instant truncated to 00:00 of its UTC day.
    pub const fn day_start(self) -> Self {
        Self {
            millis: self.millis - self.time_of_day_ms(),
        }
    }

    /// Shift by a signed number of milliseconds.
    pub const fn offset_ms(self, ms: i64) -> Self {
        Self {
            millis: self.millis + ms,
        }
    }

    /// Shift by whole days.
    pub const fn offset_days(self, days: i64) -> Self {
        self.offset_ms(days * MILLIS_PER_DAY)
    }

    /// Shift by fractional minutes, rounded to the nearest millisecond.
    pub fn offset_minutes(self, minutes: f64) -> Self {
        self.offset_ms((minutes * MILLIS_PER_MINUTE as f64).round() as i64)
    }

    /// Signed milliseconds from `earlier` to `self`.
    pub const fn millis_since(self, earlier: Instant) -> i64 {
        self.millis - earlier.millis
    }
}

impl From<i64> for Instant {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", UtcTime::from_instant(*self))
    }
}
