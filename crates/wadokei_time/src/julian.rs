//! Julian Date <-> Gregorian calendar conversions.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7. The proleptic Gregorian
//! calendar is used throughout; dates before 1582 are not special-cased.

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day as a fraction, e.g. `21.25` is
/// 06:00 on the 21st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian Date for a Unix millisecond timestamp.
pub fn unix_millis_to_jd(millis: i64) -> f64 {
    UNIX_EPOCH_JD + millis as f64 / MILLIS_PER_DAY as f64
}

/// Unix millisecond timestamp for a Julian Date, rounded to the nearest ms.
pub fn jd_to_unix_millis(jd: f64) -> i64 {
    ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64
}
