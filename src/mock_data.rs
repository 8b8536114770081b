//! # Built-in Mock Dataset
//!
//! Four locations with hand-made hourly series, used when no dataset file is
//! configured or the configured one fails to load. Mirrors the role of an
//! offline model: the dashboard always has something valid to show.
//!
//! Every series here holds 24 hourly values starting at midnight, with
//! margins in the same unit as the data (°C, mm or %).

use crate::dataset::{Dataset, LocationData};
use crate::{MeasurementSeries, HOURS_PER_DAY};

/// Location selected when nothing else is configured.
pub const DEFAULT_LOCATION: &str = "Current Location";

fn series(data: [f32; HOURS_PER_DAY], error_margin: [f32; HOURS_PER_DAY]) -> MeasurementSeries {
    MeasurementSeries {
        data: data.to_vec(),
        error_margin: error_margin.to_vec(),
    }
}

/// The built-in dataset, in dropdown order.
pub fn builtin() -> Dataset {
    let locations = vec![
        LocationData {
            name: "Current Location".to_string(),
            condition: "Partly Cloudy".to_string(),
            temperature: series(
                [
                    22.0, 23.0, 24.0, 25.0, 24.0, 23.0, 22.0, 21.0, 20.0, 19.0, 18.0, 17.0,
                    16.0, 15.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0,
                ],
                [
                    1.0, 1.0, 1.5, 1.5, 1.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                ],
            ),
            precipitation: series(
                [
                    0.0, 0.1, 0.5, 2.0, 1.0, 0.3, 0.0, 0.0, 0.0, 0.2, 0.4, 0.6,
                    0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 1.8, 1.6, 1.4, 1.2, 1.0,
                ],
                [
                    0.1, 0.1, 0.2, 0.5, 0.3, 0.1, 0.0, 0.0, 0.0, 0.1, 0.1, 0.2,
                    0.2, 0.3, 0.3, 0.3, 0.4, 0.4, 0.5, 0.4, 0.4, 0.3, 0.3, 0.2,
                ],
            ),
            moisture: series(
                [
                    50.0, 55.0, 60.0, 65.0, 63.0, 58.0, 52.0, 48.0, 45.0, 43.0, 40.0, 38.0,
                    35.0, 33.0, 30.0, 32.0, 35.0, 38.0, 40.0, 43.0, 45.0, 48.0, 50.0, 53.0,
                ],
                [
                    2.0, 2.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0,
                    2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0,
                ],
            ),
        },
        LocationData {
            name: "New York".to_string(),
            condition: "Sunny".to_string(),
            temperature: series(
                [
                    18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0, 29.0,
                    30.0, 31.0, 30.0, 29.0, 28.0, 27.0, 26.0, 25.0, 24.0, 23.0, 22.0, 21.0,
                ],
                [
                    1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
                    1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                ],
            ),
            precipitation: series(
                [
                    0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3,
                    1.4, 1.5, 1.4, 1.3, 1.2, 1.1, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5,
                ],
                [
                    0.1, 0.1, 0.1, 0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 0.3, 0.3, 0.3,
                    0.3, 0.3, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 0.2, 0.2, 0.1, 0.1,
                ],
            ),
            moisture: series(
                [
                    45.0, 47.0, 49.0, 51.0, 53.0, 55.0, 57.0, 59.0, 61.0, 63.0, 65.0, 67.0,
                    69.0, 71.0, 69.0, 67.0, 65.0, 63.0, 61.0, 59.0, 57.0, 55.0, 53.0, 51.0,
                ],
                [
                    2.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
                    3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0, 2.0, 2.0,
                ],
            ),
        },
        LocationData {
            name: "London".to_string(),
            condition: "Rainy".to_string(),
            temperature: series(
                [
                    15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0,
                    25.0, 24.0, 23.0, 22.0, 21.0, 20.0, 19.0, 18.0, 17.0, 16.0, 15.0, 14.0,
                ],
                [
                    1.0, 1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
                    1.5, 1.5, 1.5, 1.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                ],
            ),
            precipitation: series(
                [
                    0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6,
                    1.5, 1.4, 1.3, 1.2, 1.1, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4,
                ],
                [
                    0.2, 0.2, 0.2, 0.2, 0.3, 0.3, 0.3, 0.3, 0.3, 0.3, 0.4, 0.4,
                    0.4, 0.3, 0.3, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 0.2, 0.2, 0.1,
                ],
            ),
            moisture: series(
                [
                    60.0, 62.0, 64.0, 66.0, 68.0, 70.0, 72.0, 74.0, 76.0, 78.0, 80.0, 82.0,
                    80.0, 78.0, 76.0, 74.0, 72.0, 70.0, 68.0, 66.0, 64.0, 62.0, 60.0, 58.0,
                ],
                [
                    3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0,
                    4.0, 4.0, 4.0, 4.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
                ],
            ),
        },
        LocationData {
            name: "Tokyo".to_string(),
            condition: "Clear".to_string(),
            temperature: series(
                [
                    20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0, 29.0, 30.0, 31.0,
                    32.0, 33.0, 32.0, 31.0, 30.0, 29.0, 28.0, 27.0, 26.0, 25.0, 24.0, 23.0,
                ],
                [
                    1.0, 1.0, 1.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0,
                    2.0, 2.0, 2.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.0, 1.0, 1.0, 1.0,
                ],
            ),
            precipitation: series(
                [
                    0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2,
                    1.3, 1.4, 1.3, 1.2, 1.1, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4,
                ],
                [
                    0.1, 0.1, 0.1, 0.1, 0.2, 0.2, 0.2, 0.2, 0.2, 0.3, 0.3, 0.3,
                    0.3, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 0.2, 0.2, 0.1, 0.1, 0.1,
                ],
            ),
            moisture: series(
                [
                    55.0, 57.0, 59.0, 61.0, 63.0, 65.0, 67.0, 69.0, 71.0, 73.0, 75.0, 77.0,
                    79.0, 81.0, 79.0, 77.0, 75.0, 73.0, 71.0, 69.0, 67.0, 65.0, 63.0, 61.0,
                ],
                [
                    2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0,
                    4.0, 4.0, 4.0, 4.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0,
                ],
            ),
        },
    ];

    Dataset { locations }
}
