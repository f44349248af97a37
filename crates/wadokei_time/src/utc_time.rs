//! UTC calendar date/time with millisecond precision.
//!
//! `UtcTime` is the human-facing form of an [`Instant`]; the engine itself
//! only ever computes with instants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::instant::Instant;
use crate::julian::{MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every field against its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidField("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidField("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidField("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidField("minute must be in 0..=59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidField("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Convert to an [`Instant`], rounding to the nearest millisecond.
    pub fn to_instant(&self) -> Result<Instant, TimeError> {
        self.validate()?;
        let jd_midnight = calendar_to_jd(self.year, self.month, self.day as f64);
        let days = (jd_midnight - UNIX_EPOCH_JD).round() as i64;
        let millis = days * MILLIS_PER_DAY
            + self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + (self.second * 1000.0).round() as i64;
        Ok(Instant::from_millis(millis))
    }

    /// Calendar form of an [`Instant`].
    pub fn from_instant(instant: Instant) -> Self {
        let millis = instant.as_millis();
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let ms_of_day = millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day_frac) = jd_to_calendar(UNIX_EPOCH_JD + days as f64);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: (ms_of_day / 3_600_000) as u32,
            minute: ((ms_of_day % 3_600_000) / 60_000) as u32,
            second: (ms_of_day % 60_000) as f64 / 1000.0,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff]` with an optional trailing `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let Some((date, time)) = s.split_once('T') else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}")));
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }
        let bad = |e: &dyn Display| TimeError::Parse(format!("{e} in {s}"));
        let t = Self {
            year: date_parts[0].parse().map_err(|e| bad(&e))?,
            month: date_parts[1].parse().map_err(|e| bad(&e))?,
            day: date_parts[2].parse().map_err(|e| bad(&e))?,
            hour: time_parts[0].parse().map_err(|e| bad(&e))?,
            minute: time_parts[1].parse().map_err(|e| bad(&e))?,
            second: time_parts[2].parse().map_err(|e| bad(&e))?,
        };
        t.validate()?;
        Ok(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 5.25);
        assert_eq!(t.to_string(), "2024-01-15T12:30:05.250Z");
    }

    #[test]
    fn to_instant_known_value() {
        let t = UtcTime::new(2024, 6, 21, 6, 0, 0.0);
        assert_eq!(t.to_instant().unwrap().as_millis(), 1_718_949_600_000);
    }

    #[test]
    fn from_instant_before_epoch() {
        let t = UtcTime::from_instant(Instant::from_millis(-1000));
        assert_eq!(t.to_string(), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn parse_with_and_without_z() {
        let a: UtcTime = "2024-03-20T12:00:00Z".parse().unwrap();
        let b: UtcTime = "2024-03-20T12:00:00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour, 12);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024-03-20".parse::<UtcTime>(), Err(TimeError::Parse(_))));
        assert!(matches!("2024-xx-20T00:00:00Z".parse::<UtcTime>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            "2023-02-29T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::InvalidField(_))
        ));
        assert!(matches!(
            "2024-13-01T00:00:00Z".parse::<UtcTime>(),
            Err(TimeError::InvalidField(_))
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn instant_calendar_roundtrip(ms in -2_000_000_000_000i64..4_000_000_000_000i64) {
                let instant = Instant::from_millis(ms);
                let back = UtcTime::from_instant(instant).to_instant().unwrap();
                prop_assert_eq!(back, instant);
            }
        }
    }
}
