//! Heavenly-stem index for a traditional hour.
//!
//! The stem of an hour depends on which day's pre-dawn segment the hour
//! belongs to. Pre-dawn instants resolve directly. Daytime instants and
//! the evening half of the night defer to the same day's pre-dawn; the
//! part of the night past the midnight mark defers, through the next
//! daytime, to the following pre-dawn. At most two hops are needed.

use wadokei_sun::SolarCalculator;
use wadokei_time::{Instant, MILLIS_PER_DAY};

use crate::error::WadokeiError;
use crate::scale::{ScaleInfo, Segment};

/// Reference day for the 5-day stem cycle (2012-07-21T00:00:00Z).
pub const STEM_EPOCH_MS: i64 = 1_342_828_800_000;

/// Hops allowed before giving up on reaching a pre-dawn segment.
pub const MAX_STEM_HOPS: usize = 2;

const HALF_DAY_MS: i64 = MILLIS_PER_DAY / 2;

/// A resolved stem and the number of hops it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemResolution {
    pub stem: u8,
    pub hops: usize,
}

/// Stem index `0..10` for display hour `hour` at `instant`.
pub fn stem(sun: &mut SolarCalculator, hour: f64, instant: Instant) -> Result<u8, WadokeiError> {
    resolve_stem(sun, hour, instant).map(|r| r.stem)
}

/// Follow the deferral chain from `instant` to a pre-dawn segment.
pub fn resolve_stem(
    sun: &mut SolarCalculator,
    hour: f64,
    instant: Instant,
) -> Result<StemResolution, WadokeiError> {
    let mut at = instant;
    for hops in 0..=MAX_STEM_HOPS {
        let info = ScaleInfo::for_instant(sun, at)?;
        match info.segment {
            Segment::PreDawn => {
                return Ok(StemResolution {
                    stem: pre_dawn_stem(&info, hour),
                    hops,
                });
            }
            Segment::Night if hour < 6.0 => {
                at = at.offset_ms(HALF_DAY_MS);
            }
            Segment::Daytime | Segment::Night => {
                let dx = sun.shift(at);
                let sunrise = sun.sunrise(dx)?.as_millis();
                let prev_sunset = sun.previous_sunset(dx)?.as_millis();
                at = Instant::from_millis((2 * sunrise + prev_sunset).div_euclid(3));
            }
        }
    }
    Err(WadokeiError::StemUnresolved { instant })
}

/// Base rule, valid only for a pre-dawn segment.
fn pre_dawn_stem(info: &ScaleInfo, hour: f64) -> u8 {
    // Instant at which the folded hour reads 0 (scale position -0.5).
    let reference = info.t0.as_millis() as f64 - (info.f0 + 0.5) * info.rate();
    let days = ((reference - STEM_EPOCH_MS as f64) / MILLIS_PER_DAY as f64).floor() as i64;
    let cycle = days.rem_euclid(5);
    ((cycle * 12 + hour.floor() as i64).rem_euclid(10)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use wadokei_sun::Location;
    use wadokei_time::{MILLIS_PER_MINUTE, UtcTime};

    fn utc(s: &str) -> Instant {
        s.parse::<UtcTime>().unwrap().to_instant().unwrap()
    }

    fn tokyo() -> SolarCalculator {
        SolarCalculator::new(Location::new(35.689506, 139.6917).unwrap())
    }

    /// First instant from `start` (minute steps) in `segment` whose hour
    /// satisfies `pred`.
    fn find(
        sun: &mut SolarCalculator,
        start: Instant,
        segment: Segment,
        pred: impl Fn(f64) -> bool,
    ) -> (Instant, f64) {
        for m in 0..(24 * 60) {
            let t = start.offset_ms(m * MILLIS_PER_MINUTE);
            let info = ScaleInfo::for_instant(sun, t).unwrap();
            let h = info.hour(t);
            if info.segment == segment && pred(h) {
                return (t, h);
            }
        }
        panic!("no {segment:?} instant found");
    }

    #[test]
    fn pre_dawn_resolves_without_hops() {
        let mut sun = tokyo();
        let t = utc("2024-06-21T17:00:00Z");
        let info = ScaleInfo::for_instant(&mut sun, t).unwrap();
        assert_eq!(info.segment, Segment::PreDawn);
        let r = resolve_stem(&mut sun, info.hour(t), t).unwrap();
        assert_eq!(r.hops, 0);
        assert!(r.stem < 10);
    }

    #[test]
    fn daytime_takes_one_hop() {
        let mut sun = tokyo();
        let t = utc("2024-06-21T06:00:00Z");
        let info = ScaleInfo::for_instant(&mut sun, t).unwrap();
        assert_eq!(info.segment, Segment::Daytime);
        assert_eq!(resolve_stem(&mut sun, info.hour(t), t).unwrap().hops, 1);
    }

    #[test]
    fn evening_takes_one_hop() {
        let mut sun = tokyo();
        let (t, h) = find(&mut sun, utc("2024-06-21T10:30:00Z"), Segment::Night, |h| h >= 6.0);
        assert_eq!(resolve_stem(&mut sun, h, t).unwrap().hops, 1);
    }

    #[test]
    fn past_midnight_mark_takes_two_hops() {
        let mut sun = tokyo();
        let (t, h) = find(&mut sun, utc("2024-06-21T10:30:00Z"), Segment::Night, |h| h < 6.0);
        assert_eq!(resolve_stem(&mut sun, h, t).unwrap().hops, 2);
    }

    #[test]
    fn daytime_shares_the_same_days_pre_dawn() {
        let mut sun = tokyo();
        let pre_dawn = utc("2024-06-20T17:00:00Z"); // 02:00 JST, 21 June
        let daytime = utc("2024-06-21T06:00:00Z"); // 15:00 JST, 21 June
        for hour in [0.0, 3.7, 7.2, 11.9] {
            assert_eq!(
                stem(&mut sun, hour, pre_dawn).unwrap(),
                stem(&mut sun, hour, daytime).unwrap(),
                "hour {hour}"
            );
        }
    }

    #[test]
    fn late_night_folds_onto_next_pre_dawn() {
        let mut sun = tokyo();
        let (late, h) = find(&mut sun, utc("2024-06-21T10:30:00Z"), Segment::Night, |h| h < 6.0);
        let next_pre_dawn = utc("2024-06-21T17:00:00Z"); // 02:00 JST, 22 June
        assert_eq!(
            stem(&mut sun, h, late).unwrap(),
            stem(&mut sun, h, next_pre_dawn).unwrap()
        );
    }

    #[test]
    fn stem_advances_with_hour_within_a_day() {
        let mut sun = tokyo();
        let t = utc("2024-06-20T17:00:00Z");
        let s0 = stem(&mut sun, 0.0, t).unwrap();
        let s1 = stem(&mut sun, 1.0, t).unwrap();
        assert_eq!(s1, (s0 + 1) % 10);
    }

    #[test]
    fn consecutive_days_shift_by_two() {
        // Each day adds 12 hours, i.e. 2 stems.
        let mut sun = tokyo();
        let d1 = utc("2024-06-20T17:00:00Z");
        let d2 = utc("2024-06-21T17:00:00Z");
        let s1 = stem(&mut sun, 0.0, d1).unwrap();
        let s2 = stem(&mut sun, 0.0, d2).unwrap();
        assert_eq!(s2, (s1 + 2) % 10);
    }
}
