//! Sunrise/sunset/transit by fixed-point refinement of the hour angle.
//!
//! Low-precision solar theory (mean longitude, mean anomaly, obliquity with
//! the principal nutation term, equation of time) evaluated in Julian
//! centuries from J2000.0. The event time of day `x` (minutes from 00:00
//! UTC) is refined until two successive estimates agree within
//! [`CONVERGENCE_MINUTES`]; two or three passes are typical.

use std::f64::consts::PI;

use tracing::{debug, trace};
use wadokei_time::{Instant, MILLIS_PER_MINUTE};

use crate::cache::{CacheStats, EventCache};
use crate::error::SunError;
use crate::types::{Location, SolarEventKind};

/// Stop refining once successive estimates differ by less than this.
pub const CONVERGENCE_MINUTES: f64 = 0.006;

/// Iteration cap for the refinement loop.
pub const MAX_ITERATIONS: usize = 16;

/// Minutes in a Julian century (36 525 days).
const MINUTES_PER_CENTURY: f64 = 52_596_000.0;

/// Milliseconds of solar time per degree of longitude (4 minutes).
const MILLIS_PER_DEGREE: f64 = 240_000.0;

/// Cosine of the zenith distance 90°50′ (refraction + solar semidiameter).
const COS_ZENITH: f64 = -0.014543897651583;

/// Geometric mean longitude of the Sun, radians.
fn mean_longitude(t: f64) -> f64 {
    let mut l = 5.2918382920468073E-6;
    l = l * t + 628.3319667861392;
    l * t + 4.895063168412976
}

/// Mean anomaly of the Sun, radians.
fn mean_anomaly(t: f64) -> f64 {
    let mut m = -2.6825710603152847E-6;
    m = m * t + 628.3019551515195;
    m * t + 6.240060141224984
}

/// Obliquity of the ecliptic with the 18.6-year nutation term, radians.
fn obliquity(t: f64) -> f64 {
    let mut e0 = 8.7896720385158861E-9;
    e0 = e0 * t - 2.8604007185462624E-9;
    e0 = e0 * t - 2.2696552481142927E-4;
    e0 = e0 * t + 0.40909280422233;
    let omega = 2.18235969669371 - 33.75704138135305 * t;
    e0 + 4.4680428851054839E-5 * omega.cos()
}

/// Equation of time in minutes.
fn equation_of_time(t: f64, l0: f64, m: f64, eps: f64) -> f64 {
    let e = 0.016708634 - t * (0.000042037 + 0.0000001267 * t);
    let y = (eps / 2.0).tan().powi(2);
    let sin_m = m.sin();
    let eq = y * (2.0 * l0).sin() - 2.0 * e * sin_m + 4.0 * e * y * sin_m * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    eq * 720.0 / PI
}

/// Hour angle of the horizon crossing, radians in `[0, π]`.
///
/// Returns `None` when the Sun does not reach the 90°50′ zenith distance
/// on this day at this latitude.
fn horizon_hour_angle(lat_rad: f64, t: f64, l0: f64, m: f64, eps: f64) -> Option<f64> {
    // Equation of center, then nutation and aberration, for the apparent longitude.
    let mut lambda = l0;
    let c1 = (2.4434609527920616E-7 * t - 8.4072510068566855E-5) * t + 0.033416108765268;
    lambda += c1 * m.sin();
    let c2 = -1.7627825445142727E-6 * t + 3.4894367735122632E-4;
    lambda += c2 * (m + m).sin();
    lambda += 5.0440015382636125E-6 * (m + m + m).sin();
    lambda -= 9.9309234438477346E-5;
    let omega = -33.75704138135305 * t + 2.18235969669371;
    lambda -= 8.3426738245328961E-5 * omega.sin();

    let declination = (eps.sin() * lambda.sin()).asin();
    let cos_h = COS_ZENITH / (lat_rad.cos() * declination.cos())
        - lat_rad.tan() * declination.tan();
    if (-1.0..=1.0).contains(&cos_h) {
        Some(cos_h.acos())
    } else {
        None
    }
}

/// Julian centuries from J2000.0 at a Unix-millisecond day start.
fn centuries_at(day_start: Instant) -> f64 {
    (day_start.as_millis() as f64 / 9_131_250.0 - 103_680.0) / 345_600.0
}

/// Solve one event for the UTC day starting at `day_start`.
///
/// `seed_minutes` is the initial time-of-day estimate. The result is
/// `day_start + x` minutes and may fall outside the UTC day itself.
pub fn solve_event(
    location: &Location,
    kind: SolarEventKind,
    day_start: Instant,
    seed_minutes: f64,
) -> Result<Instant, SunError> {
    let lat_rad = location.latitude_rad();
    let lon = location.longitude_deg();
    let sign = kind.sign();
    let t0 = centuries_at(day_start);

    let mut x = seed_minutes;
    for iteration in 0..MAX_ITERATIONS {
        let prev = x;
        let t = t0 + x / MINUTES_PER_CENTURY;
        let l0 = mean_longitude(t);
        let m = mean_anomaly(t);
        let eps = obliquity(t);

        let ha = if kind == SolarEventKind::Transit {
            0.0
        } else {
            horizon_hour_angle(lat_rad, t, l0, m, eps)
                .ok_or(SunError::NoSunEvent { kind, day_start })?
        };
        x = (1.0 + sign * ha / PI) * 720.0 - lon * 4.0 - equation_of_time(t, l0, m, eps);
        trace!(%kind, iteration, minutes = x, "refined event estimate");

        if (x - prev).abs() <= CONVERGENCE_MINUTES {
            return Ok(day_start.offset_minutes(x));
        }
    }
    Err(SunError::NoConvergence { kind, day_start })
}

/// Sunrise/sunset calculator bound to one location, owning the event cache.
#[derive(Debug, Clone)]
pub struct SolarCalculator {
    location: Location,
    cache: EventCache,
}

impl Default for SolarCalculator {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl SolarCalculator {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            cache: EventCache::default(),
        }
    }

    pub fn with_cache(location: Location, cache: EventCache) -> Self {
        Self { location, cache }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Move to a new location. Every cached event is dropped.
    pub fn set_location(&mut self, location: Location) {
        debug!(
            latitude = location.latitude_deg(),
            longitude = location.longitude_deg(),
            evicted = self.cache.len(),
            "location changed, clearing event cache"
        );
        self.location = location;
        self.cache.clear();
    }

    pub fn cache(&self) -> &EventCache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Shift a civil instant by the longitude (4 minutes per degree).
    ///
    /// The result only selects which UTC day's events bound the instant.
    pub fn shift(&self, instant: Instant) -> Instant {
        instant.offset_ms((self.location.longitude_deg() * MILLIS_PER_DEGREE).round() as i64)
    }

    /// Event of `kind` for the UTC day containing `instant`, memoized.
    pub fn event(&mut self, kind: SolarEventKind, instant: Instant) -> Result<Instant, SunError> {
        let day_start = instant.day_start();
        if let Some(cached) = self.cache.get(kind, day_start) {
            debug!(%kind, %day_start, "event cache hit");
            return Ok(cached);
        }
        let seed = instant.time_of_day_ms() as f64 / MILLIS_PER_MINUTE as f64;
        let value = solve_event(&self.location, kind, day_start, seed)?;
        debug!(%kind, %day_start, event = %value, "solved solar event");
        Ok(self.cache.set(kind, day_start, value))
    }

    pub fn sunrise(&mut self, instant: Instant) -> Result<Instant, SunError> {
        self.event(SolarEventKind::Sunrise, instant)
    }

    pub fn sunset(&mut self, instant: Instant) -> Result<Instant, SunError> {
        self.event(SolarEventKind::Sunset, instant)
    }

    pub fn transit(&mut self, instant: Instant) -> Result<Instant, SunError> {
        self.event(SolarEventKind::Transit, instant)
    }

    /// Sunset of the day before the one containing `instant`.
    pub fn previous_sunset(&mut self, instant: Instant) -> Result<Instant, SunError> {
        self.sunset(instant.offset_days(-1))
    }

    /// Sunrise of the day after the one containing `instant`.
    pub fn next_sunrise(&mut self, instant: Instant) -> Result<Instant, SunError> {
        self.sunrise(instant.offset_days(1))
    }
}
