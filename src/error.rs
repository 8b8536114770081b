//! Error types for the weather dashboard.

use std::io;
use thiserror::Error;

/// Errors raised by the dashboard core and its data sources.
///
/// `InvalidSeriesLength` and `InvalidHourOffset` are precondition failures:
/// they mean the upstream data is malformed and are reported immediately
/// instead of being clamped or truncated.
#[derive(Error, Debug)]
pub enum DashError {
    /// Series or margin length is not 24, or the two lengths differ
    #[error("invalid series length: {data} samples and {margin} margins, expected 24 of each")]
    InvalidSeriesLength {
        /// Number of data samples
        data: usize,
        /// Number of error-margin entries
        margin: usize,
    },

    /// Rotation pivot outside `0..len`
    #[error("hour offset {offset} out of range 0..{len}")]
    InvalidHourOffset {
        /// The rejected offset
        offset: usize,
        /// Length of the series being rotated
        len: usize,
    },

    /// Error margins are half-widths and must be finite and non-negative
    #[error("error margin at hour {index} must be finite and non-negative, got {value}")]
    InvalidErrorMargin {
        /// Hour index of the offending entry
        index: usize,
        /// The rejected value
        value: f32,
    },

    /// Location name not present in the data source
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Dataset file could not be read
    #[error("dataset IO: {0}")]
    Io(#[from] io::Error),

    /// Dataset file is not valid JSON for the expected shape
    #[error("dataset parse: {0}")]
    Parse(#[from] serde_json::Error),
}
