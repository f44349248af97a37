//! Unequal-hour (wadokei) clock engine.
//!
//! Daylight and night are each split into six traditional hours whose
//! length follows the local sunrise and sunset. This crate maps an
//! instant onto that scale and labels it:
//! - [`ScaleInfo`]: the segment bounding an instant, its display hour and
//!   the delay until the next quarter boundary
//! - [`stem`](mod@stem): the heavenly stem of an hour
//! - [`WadokeiTime`] and [`render`]: glyphs, names and percent-escape
//!   templates
//! - [`Wadokei`]: one owned engine holding location, template and the
//!   solar event cache; [`SharedWadokei`] wraps it for threaded hosts
//!
//! ```no_run
//! use wadokei_core::{Wadokei, WadokeiConfig};
//!
//! let mut clock = Wadokei::new(WadokeiConfig::default())?;
//! let reading = clock.now()?;
//! println!("{}", clock.render(&reading.time));
//! # Ok::<(), wadokei_core::WadokeiError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod names;
pub mod reading;
pub mod scale;
pub mod stem;

pub use config::WadokeiConfig;
pub use engine::{SharedWadokei, SunEvents, Wadokei};
pub use error::WadokeiError;
pub use format::{DEFAULT_FORMAT, render};
pub use reading::{BELL_WINDOW, Reading, WadokeiTime};
pub use scale::{BOUNDARY_SLACK_MS, ScaleInfo, Segment, fold_hour, hour_number};
pub use stem::{MAX_STEM_HOPS, STEM_EPOCH_MS, StemResolution, resolve_stem};

pub use wadokei_sun::Location;
pub use wadokei_time::Instant;
