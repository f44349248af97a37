//! Mapping continuous time onto the unequal-hour scale.
//!
//! Daylight (sunrise to sunset) and night (sunset to sunrise) are each
//! split into 6 equal units whose real length varies with season and
//! latitude. Positions on the scale (`f`) run from -3 to 15 across the
//! three segments that can contain an instant:
//!
//! | segment  | from            | to            | f        |
//! |----------|-----------------|---------------|----------|
//! | pre-dawn | previous sunset | sunrise       | -3 .. 3  |
//! | daytime  | sunrise         | sunset        |  3 .. 9  |
//! | night    | sunset          | next sunrise  |  9 .. 15 |
//!
//! The displayed hour folds `f` into `[0, 12)` with whole traditional
//! hours starting at the `.5` marks.

use wadokei_sun::{SolarCalculator, SunError};
use wadokei_time::Instant;

/// Slack added to a boundary delay so the next query lands after it.
pub const BOUNDARY_SLACK_MS: i64 = 100;

/// Bell counts, from the midnight mark onward.
const HOUR_NUMBERS: [u8; 6] = [9, 8, 7, 6, 5, 4];

/// The three segments an instant can fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Previous sunset to sunrise.
    PreDawn,
    /// Sunrise to sunset.
    Daytime,
    /// Sunset to next sunrise.
    Night,
}

impl Segment {
    /// Numeric tag: 0 pre-dawn, 1 daytime, 2 night.
    pub const fn tag(self) -> u8 {
        match self {
            Self::PreDawn => 0,
            Self::Daytime => 1,
            Self::Night => 2,
        }
    }
}

/// The segment containing an instant, with its boundary instants and
/// scale positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleInfo {
    pub t0: Instant,
    pub t1: Instant,
    pub f0: f64,
    pub f1: f64,
    pub segment: Segment,
}

impl ScaleInfo {
    /// Select the segment bounding `instant`.
    ///
    /// Events are taken from the UTC day of the longitude-shifted instant.
    pub fn for_instant(sun: &mut SolarCalculator, instant: Instant) -> Result<Self, SunError> {
        let dx = sun.shift(instant);
        let sunset = sun.sunset(dx)?;
        let info = if instant < sunset {
            let sunrise = sun.sunrise(dx)?;
            if instant >= sunrise {
                Self {
                    t0: sunrise,
                    t1: sunset,
                    f0: 3.0,
                    f1: 9.0,
                    segment: Segment::Daytime,
                }
            } else {
                Self {
                    t0: sun.previous_sunset(dx)?,
                    t1: sunrise,
                    f0: -3.0,
                    f1: 3.0,
                    segment: Segment::PreDawn,
                }
            }
        } else {
            Self {
                t0: sunset,
                t1: sun.next_sunrise(dx)?,
                f0: 9.0,
                f1: 15.0,
                segment: Segment::Night,
            }
        };
        Ok(info)
    }

    /// Real length of the segment in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        self.t1.millis_since(self.t0)
    }

    /// Scale units covered by the segment (always 6).
    pub fn span(&self) -> f64 {
        self.f1 - self.f0
    }

    /// Milliseconds per scale unit.
    pub fn rate(&self) -> f64 {
        self.duration_ms() as f64 / self.span()
    }

    /// `t0 <= instant < t1`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.t0 <= instant && instant < self.t1
    }

    /// Unfolded scale position of `instant`, linear within the segment.
    pub fn position(&self, instant: Instant) -> f64 {
        self.f0 + instant.millis_since(self.t0) as f64 / self.rate()
    }

    /// Traditional fractional hour in `[0, 12)`.
    pub fn hour(&self, instant: Instant) -> f64 {
        fold_hour(self.position(instant))
    }

    /// Milliseconds until just after the next quarter-unit boundary.
    pub fn next_delay_ms(&self, instant: Instant) -> i64 {
        let f = self.position(instant);
        let next_quarter = ((4.0 * f).floor() + 1.0) / 4.0;
        let boundary = (next_quarter - self.f0) * self.rate();
        let elapsed = instant.millis_since(self.t0) as f64;
        (boundary - elapsed).ceil() as i64 + BOUNDARY_SLACK_MS
    }
}

/// Fold a scale position into the `[0, 12)` display hour.
pub fn fold_hour(f: f64) -> f64 {
    (12.5 + f % 12.0) % 12.0
}

/// Bell count (9 down to 4) for a display hour.
pub fn hour_number(hour: f64) -> u8 {
    let index = ((hour - 0.5).floor() as i64).rem_euclid(6);
    HOUR_NUMBERS[index as usize]
}
