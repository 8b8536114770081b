//! # Location Datasets
//!
//! The dashboard reads its series from a [`Dataset`]: an ordered list of
//! locations, each carrying a weather condition and one
//! [`MeasurementSeries`] per [`ViewKind`]. The order is the order shown in
//! the location dropdown.
//!
//! ## File Format
//!
//! Datasets can be loaded from JSON with the same shape as the built-in mock
//! data:
//!
//! ```json
//! {
//!   "locations": [
//!     {
//!       "name": "Oslo",
//!       "condition": "Snow",
//!       "temperature":   { "data": [...24 values], "error_margin": [...24 values] },
//!       "precipitation": { "data": [...], "error_margin": [...] },
//!       "moisture":      { "data": [...], "error_margin": [...] }
//!     }
//!   ]
//! }
//! ```
//!
//! Every series is validated at load time, so a malformed file is rejected
//! at the boundary instead of producing a misaligned chart later.

use crate::selection::DataSource;
use crate::{DashError, MeasurementSeries, ViewKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All series for a single location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Name shown in the dropdown
    pub name: String,
    /// Short description, e.g. "Partly Cloudy"
    pub condition: String,
    pub temperature: MeasurementSeries,
    pub precipitation: MeasurementSeries,
    pub moisture: MeasurementSeries,
}

impl LocationData {
    /// The series for `kind`.
    pub fn series(&self, kind: ViewKind) -> &MeasurementSeries {
        match kind {
            ViewKind::Temperature => &self.temperature,
            ViewKind::Precipitation => &self.precipitation,
            ViewKind::Moisture => &self.moisture,
        }
    }
}

/// An ordered collection of locations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub locations: Vec<LocationData>,
}

impl Dataset {
    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DashError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse and validate a dataset file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DashError> {
        let contents = fs::read_to_string(&path)?;
        let dataset = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.as_ref().display(),
            locations = dataset.locations.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Write the dataset as pretty JSON.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DashError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        tracing::info!(path = %path.as_ref().display(), "dataset saved");
        Ok(())
    }

    /// Check every series of every location.
    pub fn validate(&self) -> Result<(), DashError> {
        for location in &self.locations {
            for kind in ViewKind::ALL {
                location.series(kind).validate().map_err(|e| {
                    tracing::warn!(location = %location.name, kind = %kind, "invalid series: {e}");
                    e
                })?;
            }
        }
        Ok(())
    }

    pub fn location(&self, name: &str) -> Option<&LocationData> {
        self.locations.iter().find(|l| l.name == name)
    }
}

impl DataSource for Dataset {
    fn locations(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.name.as_str()).collect()
    }

    fn lookup(&self, location: &str, kind: ViewKind) -> Option<&MeasurementSeries> {
        self.location(location).map(|l| l.series(kind))
    }

    fn condition(&self, location: &str) -> Option<&str> {
        self.location(location).map(|l| l.condition.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use tempfile::NamedTempFile;

    fn location_json(name: &str, samples: usize) -> String {
        let series = format!(
            r#"{{"data": {:?}, "error_margin": {:?}}}"#,
            vec![1.5f32; samples],
            vec![0.5f32; samples]
        );
        format!(
            r#"{{"name": "{name}", "condition": "Snow", "temperature": {series}, "precipitation": {series}, "moisture": {series}}}"#
        )
    }

    #[test]
    fn test_from_json_valid() {
        let json = format!(r#"{{"locations": [{}]}}"#, location_json("Oslo", 24));
        let dataset = Dataset::from_json(&json).unwrap();
        assert_eq!(dataset.locations(), vec!["Oslo"]);
        assert_eq!(dataset.condition("Oslo"), Some("Snow"));
        assert_eq!(
            dataset.lookup("Oslo", ViewKind::Moisture).unwrap().data[0],
            1.5
        );
    }

    #[test]
    fn test_from_json_rejects_short_series() {
        let json = format!(r#"{{"locations": [{}]}}"#, location_json("Oslo", 23));
        assert!(matches!(
            Dataset::from_json(&json),
            Err(DashError::InvalidSeriesLength {
                data: 23,
                margin: 23
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Dataset::from_json("not json"),
            Err(DashError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Dataset::load_from_path("/nonexistent/weather-data.json"),
            Err(DashError::Io(_))
        ));
    }

    #[test]
    fn test_save_then_load_builtin() {
        let temp_file = NamedTempFile::new().unwrap();
        let dataset = mock_data::builtin();

        dataset.save_to_path(temp_file.path()).unwrap();
        let loaded = Dataset::load_from_path(temp_file.path()).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_lookup_unknown_location() {
        let dataset = mock_data::builtin();
        assert!(dataset.lookup("Atlantis", ViewKind::Temperature).is_none());
        assert!(dataset.condition("Atlantis").is_none());
    }
}
