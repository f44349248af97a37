//! Location and event types used by the solar ephemeris.

use std::fmt::{Display, Formatter};

use crate::error::SunError;

/// Latitude of the default location (Edo, now Tokyo).
pub const DEFAULT_LATITUDE_DEG: f64 = 35.689506;
/// Longitude of the default location (Edo, now Tokyo).
pub const DEFAULT_LONGITUDE_DEG: f64 = 139.6917;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Location {
    /// Create a location, validating latitude and normalizing longitude
    /// into `[-180, 180)`.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SunError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(SunError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SunError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg: normalize_longitude(longitude_deg),
        })
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive, in `[-180, 180)`.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
        }
    }
}

/// Wrap a longitude into `[-180, 180)`.
pub fn normalize_longitude(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Solar event kinds the solver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventKind {
    /// Upper limb at the horizon, morning.
    Sunrise,
    /// Sun on the local meridian.
    Transit,
    /// Upper limb at the horizon, evening.
    Sunset,
}

impl SolarEventKind {
    /// Sign applied to the hour angle: -1 rising, 0 transit, +1 setting.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Sunrise => -1.0,
            Self::Transit => 0.0,
            Self::Sunset => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Transit => "transit",
            Self::Sunset => "sunset",
        }
    }
}

impl Display for SolarEventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
