//! Golden-value tests for sunrise/sunset against published almanac times.
//!
//! Reference times are the civil sunrise/sunset tables (upper limb, 34'
//! refraction) rounded to the minute, so a 3-minute tolerance is used.

use proptest::prelude::*;
use wadokei_sun::{Location, SolarCalculator, SolarEventKind, SunError, solve_event};
use wadokei_time::{Instant, MILLIS_PER_DAY, UtcTime};

const TOLERANCE_MIN: f64 = 3.0;

fn utc(s: &str) -> Instant {
    s.parse::<UtcTime>().unwrap().to_instant().unwrap()
}

fn assert_close(actual: Instant, expected: &str, what: &str) {
    let diff_min = actual.millis_since(utc(expected)) as f64 / 60_000.0;
    assert!(
        diff_min.abs() < TOLERANCE_MIN,
        "{what}: got {actual}, expected {expected} (off by {diff_min:.2} min)"
    );
}

fn events_for_local_noon(loc: Location, noon_utc: &str) -> (Instant, Instant) {
    let mut calc = SolarCalculator::new(loc);
    let dx = calc.shift(utc(noon_utc));
    (calc.sunrise(dx).unwrap(), calc.sunset(dx).unwrap())
}

#[test]
fn tokyo_june_solstice() {
    let loc = Location::new(35.689506, 139.6917).unwrap();
    let (rise, set) = events_for_local_noon(loc, "2024-06-21T03:00:00Z");
    // 04:25 / 19:00 JST
    assert_close(rise, "2024-06-20T19:25:00Z", "Tokyo sunrise");
    assert_close(set, "2024-06-21T10:00:00Z", "Tokyo sunset");
}

#[test]
fn new_delhi_march_equinox() {
    let loc = Location::new(28.6139, 77.209).unwrap();
    let (rise, set) = events_for_local_noon(loc, "2024-03-20T06:30:00Z");
    // 06:24 / 18:32 IST
    assert_close(rise, "2024-03-20T00:54:00Z", "New Delhi sunrise");
    assert_close(set, "2024-03-20T13:02:00Z", "New Delhi sunset");
}

#[test]
fn london_december_solstice() {
    let loc = Location::new(51.5074, -0.1278).unwrap();
    let (rise, set) = events_for_local_noon(loc, "2024-12-21T12:00:00Z");
    assert_close(rise, "2024-12-21T08:04:00Z", "London sunrise");
    assert_close(set, "2024-12-21T15:53:00Z", "London sunset");
}

#[test]
fn sydney_december_solstice() {
    let loc = Location::new(-33.8688, 151.2093).unwrap();
    let (rise, set) = events_for_local_noon(loc, "2024-12-21T01:00:00Z");
    // 05:41 / 20:05 AEDT (UTC+11)
    assert_close(rise, "2024-12-20T18:41:00Z", "Sydney sunrise");
    assert_close(set, "2024-12-21T09:05:00Z", "Sydney sunset");
}

#[test]
fn tromso_polar_night() {
    let mut calc = SolarCalculator::new(Location::new(69.6492, 18.9553).unwrap());
    let dx = calc.shift(utc("2024-12-21T11:00:00Z"));
    assert!(matches!(
        calc.sunrise(dx),
        Err(SunError::NoSunEvent {
            kind: SolarEventKind::Sunrise,
            ..
        })
    ));
    // A failed solve leaves nothing behind in the cache.
    assert!(calc.cache().is_empty());
}

#[test]
fn recompute_after_clear_matches_cached() {
    let mut calc = SolarCalculator::default();
    let t = utc("2024-09-01T03:00:00Z");
    let first = calc.sunset(t).unwrap();
    calc.set_location(calc.location());
    let again = calc.sunset(t.offset_ms(5 * 3_600_000)).unwrap();
    let diff_min = again.millis_since(first).abs() as f64 / 60_000.0;
    assert!(diff_min < 0.01, "recomputed sunset drifted {diff_min} min");
}

proptest! {
    #[test]
    fn seed_does_not_change_result(
        day in 0i64..40_000,
        seed_a in 0.0f64..1440.0,
        seed_b in 0.0f64..1440.0,
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
    ) {
        let loc = Location::new(lat, lon).unwrap();
        let day_start = Instant::from_millis(day * MILLIS_PER_DAY);
        let a = solve_event(&loc, SolarEventKind::Sunset, day_start, seed_a).unwrap();
        let b = solve_event(&loc, SolarEventKind::Sunset, day_start, seed_b).unwrap();
        prop_assert!(a.millis_since(b).abs() < 600);
    }

    #[test]
    fn sunrise_precedes_sunset(
        day in 0i64..40_000,
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
    ) {
        let mut calc = SolarCalculator::new(Location::new(lat, lon).unwrap());
        let dx = calc.shift(Instant::from_millis(day * MILLIS_PER_DAY + MILLIS_PER_DAY / 2));
        let rise = calc.sunrise(dx).unwrap();
        let set = calc.sunset(dx).unwrap();
        prop_assert!(rise < set);
    }
}
