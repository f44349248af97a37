//! Computed traditional time values.

use wadokei_time::Instant;

use crate::format::{DEFAULT_FORMAT, render};
use crate::names;
use crate::scale::{Segment, hour_number};

/// Half-width of the window around an hour mark in which the bell rings.
pub const BELL_WINDOW: f64 = 0.01;

/// The traditional time at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WadokeiTime {
    /// The instant this value was computed for.
    pub instant: Instant,
    /// Fractional display hour in `[0, 12)`.
    pub hour: f64,
    /// Bell count, 4 to 9.
    pub hour_number: u8,
    /// Heavenly-stem index, 0 to 9.
    pub stem: u8,
    /// Segment the instant fell in.
    pub segment: Segment,
}

impl WadokeiTime {
    pub fn new(instant: Instant, hour: f64, stem: u8, segment: Segment) -> Self {
        Self {
            instant,
            hour,
            hour_number: hour_number(hour),
            stem,
            segment,
        }
    }

    /// `floor(hour)`, 0 to 11.
    pub fn whole_hour(&self) -> u8 {
        self.hour.floor() as u8
    }

    /// Quarter ordinal, 1 to 4.
    pub fn quarter_ordinal(&self) -> u8 {
        names::quarter_index(self.hour) as u8 + 1
    }

    pub fn branch(&self) -> char {
        names::branch(self.hour)
    }

    pub fn quarter(&self) -> char {
        names::quarter(self.hour)
    }

    pub fn stem_glyph(&self) -> char {
        names::stem(self.stem)
    }

    /// Hour name, or the midnight/noon name right at those marks.
    pub fn toki_name(&self) -> &'static str {
        if (self.hour - 0.5).abs() < BELL_WINDOW {
            names::MIDNIGHT_NAME
        } else if (self.hour - 6.5).abs() < BELL_WINDOW {
            names::NOON_NAME
        } else {
            names::toki(self.hour)
        }
    }

    /// Between the sunrise mark (3.5) and the sunset mark (9.5).
    pub fn is_daytime(&self) -> bool {
        (8.5 + self.hour) % 12.0 < 6.0
    }

    pub fn day_night_glyph(&self) -> char {
        if self.is_daytime() {
            names::DAY_GLYPH
        } else {
            names::NIGHT_GLYPH
        }
    }

    /// Stem, branch and quarter glyphs.
    pub fn kanji(&self) -> [char; 3] {
        [self.stem_glyph(), self.branch(), self.quarter()]
    }

    /// Number of bell strokes if the hour is right at an hour mark.
    pub fn bell_strikes(&self) -> Option<u8> {
        let frac = self.hour - self.hour.floor();
        if (frac - 0.5).abs() < BELL_WINDOW {
            // Classify by the mark itself so 0.495 counts as the midnight bell.
            Some(hour_number(self.hour.floor() + 0.5))
        } else {
            None
        }
    }

    /// Rendered with [`DEFAULT_FORMAT`].
    pub fn title(&self) -> String {
        render(DEFAULT_FORMAT, self)
    }
}

/// A computed time plus the delay until it next changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub time: WadokeiTime,
    /// Milliseconds until the next quarter boundary, slack included.
    pub schedule_delay_ms: i64,
}
