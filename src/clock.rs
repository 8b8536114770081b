//! Wall-clock hour sources.
//!
//! The core never reads the time itself; the application asks an
//! [`HourClock`] once at startup (or after a manual override) and then
//! advances [`HourOffset`] on its own hourly tick.

use crate::HourOffset;
use chrono::Local;

/// Provides the current hour of the day.
pub trait HourClock {
    fn current_hour(&self) -> HourOffset;
}

/// Local system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl HourClock for LocalClock {
    fn current_hour(&self) -> HourOffset {
        HourOffset::from_time(&Local::now())
    }
}

/// Always reports the same hour; used for `--hour` overrides and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub HourOffset);

impl HourClock for FixedClock {
    fn current_hour(&self) -> HourOffset {
        self.0
    }
}
