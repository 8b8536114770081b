//! # Hour-Aligned Series Windows
//!
//! Daily series are stored by hour of day (index 0 = midnight). The chart
//! instead starts at the current hour and runs 24 hours forward, wrapping
//! past midnight. This module produces that view.
//!
//! ```text
//! stored:   [h0 h1 h2 ... h6 | h7 h8 ... h23]
//! hour = 7: [h7 h8 ... h23 | h0 h1 ... h6]
//! ```
//!
//! Data and error margins are always rotated by the same offset so that
//! `value ± margin` stays paired after windowing.

use crate::{DashError, HourOffset, MeasurementSeries, ViewKind, HOURS_PER_DAY};

/// Rotate a circular series so that `series[offset]` comes first.
///
/// Returns a new vector `r` with `r[i] = series[(offset + i) % len]`. The
/// input is never modified. Fails with [`DashError::InvalidHourOffset`] when
/// `offset >= len`, which also covers an empty series.
///
/// # Example
/// ```
/// use weather_dash_lib::window::rotate;
///
/// let hours: Vec<u32> = (0..24).collect();
/// let rotated = rotate(&hours, 5).unwrap();
/// assert_eq!(&rotated[..3], &[5, 6, 7]);
/// assert_eq!(rotated[23], 4);
/// ```
pub fn rotate<T: Clone>(series: &[T], offset: usize) -> Result<Vec<T>, DashError> {
    let len = series.len();
    if offset >= len {
        return Err(DashError::InvalidHourOffset { offset, len });
    }

    let mut rotated = Vec::with_capacity(len);
    rotated.extend_from_slice(&series[offset..]);
    rotated.extend_from_slice(&series[..offset]);
    Ok(rotated)
}

/// A measurement series rotated to begin at the current hour.
///
/// Index `i` holds the sample for hour `(start + i) % 24`. Recomputed on
/// every render; never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowedSeries {
    kind: ViewKind,
    start: HourOffset,
    data: Vec<f32>,
    error_margin: Vec<f32>,
}

impl WindowedSeries {
    /// Validate `series` and rotate both halves by `start`.
    pub fn new(
        kind: ViewKind,
        series: &MeasurementSeries,
        start: HourOffset,
    ) -> Result<Self, DashError> {
        series.validate()?;

        let data = rotate(&series.data, start.get())?;
        let error_margin = rotate(&series.error_margin, start.get())?;

        tracing::trace!(kind = %kind, start = %start, "windowed series");

        Ok(WindowedSeries {
            kind,
            start,
            data,
            error_margin,
        })
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Hour of day shown at index 0.
    pub fn start(&self) -> HourOffset {
        self.start
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn error_margin(&self) -> &[f32] {
        &self.error_margin
    }

    /// Value at the current hour.
    pub fn current(&self) -> f32 {
        self.data[0]
    }

    /// Hour of day for every index, starting at `start`.
    pub fn hours(&self) -> Vec<HourOffset> {
        (0..HOURS_PER_DAY).map(|i| self.start.plus(i)).collect()
    }

    /// Axis labels, e.g. `"7"`, `"8"`, ... `"6"` for a window starting at 07:00.
    pub fn hour_labels(&self) -> Vec<String> {
        self.hours().iter().map(|h| h.get().to_string()).collect()
    }

    /// `data[i] + margin[i]` for every index.
    pub fn upper_band(&self) -> Vec<f32> {
        self.data
            .iter()
            .zip(&self.error_margin)
            .map(|(value, margin)| value + margin)
            .collect()
    }

    /// `data[i] - margin[i]` for every index.
    pub fn lower_band(&self) -> Vec<f32> {
        self.data
            .iter()
            .zip(&self.error_margin)
            .map(|(value, margin)| value - margin)
            .collect()
    }

    /// Lowest lower band and highest upper band, for axis scaling.
    pub fn bounds(&self) -> (f32, f32) {
        self.data.iter().zip(&self.error_margin).fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(min, max), (value, margin)| (min.min(value - margin), max.max(value + margin)),
        )
    }

    /// Hover text for one point, e.g. `"Temperature: 22.0 ± 1.5"`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let value = self.data.get(index)?;
        let margin = self.error_margin.get(index)?;
        Some(format!("{}: {:.1} ± {}", self.kind.label(), value, margin))
    }
}
