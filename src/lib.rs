//! # Weather Dash Core Library
//!
//! Data structures and pure logic behind a single-screen hourly weather
//! dashboard. The dashboard shows one of three measurement series for a
//! selected location as a line chart with an upper/lower error band, always
//! starting at the current hour.
//!
//! ## Design
//!
//! ### Fixed daily series
//! Every measurement series holds exactly [`HOURS_PER_DAY`] samples, one per
//! hour of the day (index 0 = 00:00). Each sample is paired with an error
//! margin, a non-negative half-width of the uncertainty band around it.
//!
//! ### Time windowing
//! The chart always begins at "now". [`window::rotate`] turns the circular
//! daily series into a view where index 0 is the current hour, and
//! [`window::WindowedSeries`] applies the same rotation to data and margins
//! so every band stays aligned with its sample.
//!
//! ### View cycling
//! [`view_cycle::ViewCycle`] walks Temperature → Precipitation → Moisture and
//! wraps at both ends. It can only be moved one cyclic step at a time.
//!
//! ### Data Flow
//! 1. **Clock**: the application owns the current [`HourOffset`] and ticks it hourly
//! 2. **Lookup**: a [`selection::DataSource`] supplies the raw series for (location, kind)
//! 3. **Window**: [`selection::select`] rotates the pair and computes the bands
//! 4. **Render**: [`renderer`] draws the result as ASCII or onto an `embedded-graphics` target,
//!    such as a [`frame::FrameBuffer`] sized from the `[display]` settings
//!
//! All core operations are synchronous and side-effect free apart from the
//! single mutation path in [`view_cycle::ViewCycle::advance`].

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod clock;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod mock_data;
pub mod navigation;
pub mod renderer;
pub mod selection;
pub mod view_cycle;
pub mod window;

pub use error::DashError;

/// Number of hourly samples in every measurement series.
pub const HOURS_PER_DAY: usize = 24;

/// The selectable measurement category.
///
/// The declaration order is the cyclic order used by
/// [`view_cycle::ViewCycle`]; it carries no ranking meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Temperature,
    Precipitation,
    Moisture,
}

impl ViewKind {
    /// All kinds in cyclic order.
    pub const ALL: [ViewKind; 3] = [
        ViewKind::Temperature,
        ViewKind::Precipitation,
        ViewKind::Moisture,
    ];

    /// Position of this kind in [`ViewKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            ViewKind::Temperature => 0,
            ViewKind::Precipitation => 1,
            ViewKind::Moisture => 2,
        }
    }

    /// Capitalised display name.
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Temperature => "Temperature",
            ViewKind::Precipitation => "Precipitation",
            ViewKind::Moisture => "Moisture",
        }
    }

    /// Unit suffix shown next to the headline value.
    pub fn unit(self) -> &'static str {
        match self {
            ViewKind::Temperature => "°C",
            ViewKind::Precipitation => "mm",
            ViewKind::Moisture => "%",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cyclic step through the view kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index delta applied by this step.
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// The current hour of the day, used as the rotation pivot.
///
/// Always in `0..24`. Owned by the surrounding application and advanced
/// with [`HourOffset::next`] on each hourly tick.
///
/// # Example
/// ```
/// use weather_dash_lib::HourOffset;
///
/// let late = HourOffset::new(23).unwrap();
/// assert_eq!(late.next().get(), 0);
/// assert!(HourOffset::new(24).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourOffset(u8);

impl HourOffset {
    /// Validate an hour in `0..24`.
    pub fn new(hour: usize) -> Result<Self, DashError> {
        if hour < HOURS_PER_DAY {
            Ok(HourOffset(hour as u8))
        } else {
            Err(DashError::InvalidHourOffset {
                offset: hour,
                len: HOURS_PER_DAY,
            })
        }
    }

    /// Hour of day taken from a wall-clock reading.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // chrono guarantees hour() < 24
        HourOffset(time.hour() as u8)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// The following hour, wrapping 23 → 0.
    pub fn next(self) -> Self {
        self.plus(1)
    }

    /// The hour `hours` after this one, modulo 24.
    pub fn plus(self, hours: usize) -> Self {
        HourOffset(((self.get() + hours % HOURS_PER_DAY) % HOURS_PER_DAY) as u8)
    }
}

impl fmt::Display for HourOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Hourly samples for one measurement kind at one location.
///
/// `data[h]` is the value at hour `h`; `error_margin[h]` is the half-width of
/// its uncertainty band. Both vectors must hold exactly [`HOURS_PER_DAY`]
/// entries; see [`MeasurementSeries::validate`].
///
/// # Example
/// ```
/// use weather_dash_lib::MeasurementSeries;
///
/// let series = MeasurementSeries {
///     data: (0..24).map(|h| h as f32).collect(),
///     error_margin: vec![0.5; 24],
/// };
/// assert!(series.validate().is_ok());
///
/// let short = MeasurementSeries { data: vec![1.0; 23], error_margin: vec![0.5; 24] };
/// assert!(short.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSeries {
    /// One sample per hour of day
    pub data: Vec<f32>,
    /// Non-negative half-width per sample
    #[serde(alias = "errorMargin")]
    pub error_margin: Vec<f32>,
}

impl MeasurementSeries {
    /// Check the length and margin invariants.
    pub fn validate(&self) -> Result<(), DashError> {
        if self.data.len() != HOURS_PER_DAY || self.error_margin.len() != HOURS_PER_DAY {
            return Err(DashError::InvalidSeriesLength {
                data: self.data.len(),
                margin: self.error_margin.len(),
            });
        }

        if let Some((index, &value)) = self
            .error_margin
            .iter()
            .enumerate()
            .find(|(_, m)| !m.is_finite() || **m < 0.0)
        {
            return Err(DashError::InvalidErrorMargin { index, value });
        }

        Ok(())
    }
}
