//! The clock engine: location, output template and event cache in one
//! owned value.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};
use wadokei_sun::{CacheStats, EventCache, Location, SolarCalculator, SunError};
use wadokei_time::Instant;

use crate::config::WadokeiConfig;
use crate::error::WadokeiError;
use crate::format::render;
use crate::reading::{Reading, WadokeiTime};
use crate::scale::ScaleInfo;
use crate::stem::resolve_stem;

/// Sunrise, transit and sunset bounding one solar day.
///
/// Sunrise and sunset are `None` under polar day or night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvents {
    pub sunrise: Option<Instant>,
    pub transit: Instant,
    pub sunset: Option<Instant>,
}

/// Single-owner clock engine.
///
/// `set_location` and `set_format` are the only mutators of its
/// configuration; queries mutate only the event cache.
#[derive(Debug, Clone)]
pub struct Wadokei {
    sun: SolarCalculator,
    format: String,
}

impl Default for Wadokei {
    fn default() -> Self {
        Self {
            sun: SolarCalculator::default(),
            format: WadokeiConfig::default().format,
        }
    }
}

impl Wadokei {
    pub fn new(config: WadokeiConfig) -> Result<Self, WadokeiError> {
        config.validate()?;
        let location = config.location()?;
        Ok(Self {
            sun: SolarCalculator::with_cache(
                location,
                EventCache::with_capacity(config.cache_capacity),
            ),
            format: config.format,
        })
    }

    /// Move the observer. Cached events for the old location are dropped.
    pub fn set_location(&mut self, latitude_deg: f64, longitude_deg: f64) -> Result<(), WadokeiError> {
        let location = Location::new(latitude_deg, longitude_deg)?;
        self.sun.set_location(location);
        Ok(())
    }

    pub fn location(&self) -> Location {
        self.sun.location()
    }

    /// Store a template verbatim. Any string is accepted.
    pub fn set_format(&mut self, template: impl Into<String>) {
        self.format = template.into();
        debug!(format = %self.format, "output format changed");
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.sun.cache_stats()
    }

    pub fn calculator(&self) -> &SolarCalculator {
        &self.sun
    }

    /// Segment bounding `instant`.
    pub fn scale_info(&mut self, instant: Instant) -> Result<ScaleInfo, WadokeiError> {
        Ok(ScaleInfo::for_instant(&mut self.sun, instant).inspect_err(log_sun_error)?)
    }

    /// Display hour at `instant`.
    pub fn hour(&mut self, instant: Instant) -> Result<f64, WadokeiError> {
        Ok(self.scale_info(instant)?.hour(instant))
    }

    /// Delay until just after the next quarter boundary.
    pub fn next_delay_ms(&mut self, instant: Instant) -> Result<i64, WadokeiError> {
        Ok(self.scale_info(instant)?.next_delay_ms(instant))
    }

    /// Full traditional time at `instant`.
    pub fn time_at(&mut self, instant: Instant) -> Result<WadokeiTime, WadokeiError> {
        Ok(self.at(instant)?.time)
    }

    /// Traditional time at `instant` and when to ask again.
    pub fn at(&mut self, instant: Instant) -> Result<Reading, WadokeiError> {
        let info = self.scale_info(instant)?;
        let hour = info.hour(instant);
        let resolved = resolve_stem(&mut self.sun, hour, instant).inspect_err(|e| {
            if let WadokeiError::Sun(err) = e {
                log_sun_error(err);
            }
        })?;
        let time = WadokeiTime::new(instant, hour, resolved.stem, info.segment);
        let schedule_delay_ms = info.next_delay_ms(instant);
        debug!(
            %instant,
            hour,
            segment = ?info.segment,
            stem_hops = resolved.hops,
            schedule_delay_ms,
            "computed reading"
        );
        Ok(Reading {
            time,
            schedule_delay_ms,
        })
    }

    pub fn now(&mut self) -> Result<Reading, WadokeiError> {
        self.at(Instant::now())
    }

    /// Render `time` with the configured template.
    pub fn render(&self, time: &WadokeiTime) -> String {
        render(&self.format, time)
    }

    /// Events for the solar day containing `instant`.
    pub fn sun_events(&mut self, instant: Instant) -> Result<SunEvents, WadokeiError> {
        let dx = self.sun.shift(instant);
        Ok(SunEvents {
            sunrise: optional_event(self.sun.sunrise(dx))?,
            transit: self.sun.transit(dx)?,
            sunset: optional_event(self.sun.sunset(dx))?,
        })
    }
}

fn optional_event(result: Result<Instant, SunError>) -> Result<Option<Instant>, WadokeiError> {
    match result {
        Ok(t) => Ok(Some(t)),
        Err(SunError::NoSunEvent { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn log_sun_error(err: &SunError) {
    if let SunError::NoSunEvent { kind, day_start } = err {
        warn!(%kind, %day_start, "no sun event at this latitude");
    }
}

/// A [`Wadokei`] behind a mutex, for hosts that query from several threads.
#[derive(Debug, Clone, Default)]
pub struct SharedWadokei {
    inner: Arc<Mutex<Wadokei>>,
}

impl SharedWadokei {
    pub fn new(engine: Wadokei) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Exclusive access for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, Wadokei> {
        self.inner.lock()
    }

    pub fn at(&self, instant: Instant) -> Result<Reading, WadokeiError> {
        self.inner.lock().at(instant)
    }

    pub fn now(&self) -> Result<Reading, WadokeiError> {
        self.inner.lock().now()
    }

    /// Compute and render in one critical section.
    pub fn render_at(&self, instant: Instant) -> Result<String, WadokeiError> {
        let mut engine = self.inner.lock();
        let reading = engine.at(instant)?;
        Ok(engine.render(&reading.time))
    }

    pub fn set_location(&self, latitude_deg: f64, longitude_deg: f64) -> Result<(), WadokeiError> {
        self.inner.lock().set_location(latitude_deg, longitude_deg)
    }

    pub fn location(&self) -> Location {
        self.inner.lock().location()
    }

    pub fn set_format(&self, template: impl Into<String>) {
        self.inner.lock().set_format(template);
    }

    pub fn format(&self) -> String {
        self.inner.lock().format().to_string()
    }
}

impl From<Wadokei> for SharedWadokei {
    fn from(engine: Wadokei) -> Self {
        Self::new(engine)
    }
}
