//! # Dashboard Selection
//!
//! Glue between the application state and the pure core: given the chosen
//! location, the active view and the current hour, look up the raw series
//! and produce the hour-aligned window plus the names of the neighbouring
//! views for the navigation hints.
//!
//! The application owns a [`DashState`] and calls [`select`] on every
//! render. Nothing is cached; source series are static per location.

use crate::view_cycle::ViewCycle;
use crate::window::WindowedSeries;
use crate::{DashError, Direction, HourOffset, MeasurementSeries, ViewKind};

/// Read-only provider of raw series, keyed by location and kind.
pub trait DataSource {
    /// Location names in display order.
    fn locations(&self) -> Vec<&str>;

    /// Raw 24-hour series for `(location, kind)`.
    fn lookup(&self, location: &str, kind: ViewKind) -> Option<&MeasurementSeries>;

    /// Short weather description for the headline.
    fn condition(&self, _location: &str) -> Option<&str> {
        None
    }

    fn contains(&self, location: &str) -> bool {
        self.locations().contains(&location)
    }
}

/// Everything the user can change on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashState {
    location: String,
    cycle: ViewCycle,
    hour: HourOffset,
}

impl DashState {
    /// Start on `location` at `hour`, showing temperature.
    pub fn new(location: impl Into<String>, hour: HourOffset) -> Self {
        DashState {
            location: location.into(),
            cycle: ViewCycle::new(),
            hour,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn view(&self) -> ViewKind {
        self.cycle.active()
    }

    pub fn cycle(&self) -> &ViewCycle {
        &self.cycle
    }

    pub fn hour(&self) -> HourOffset {
        self.hour
    }

    /// Move the active view one step.
    pub fn navigate(&mut self, direction: Direction) -> ViewKind {
        self.cycle.advance(direction)
    }

    /// Switch location. Unknown names are rejected and leave the state as is.
    pub fn select_location<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        location: &str,
    ) -> Result<(), DashError> {
        if !source.contains(location) {
            return Err(DashError::UnknownLocation(location.to_string()));
        }
        tracing::debug!(from = %self.location, to = %location, "location changed");
        self.location = location.to_string();
        Ok(())
    }

    /// Replace the hour with a fresh clock reading.
    pub fn set_hour(&mut self, hour: HourOffset) {
        self.hour = hour;
    }

    /// Advance the hour by one, wrapping at midnight.
    pub fn tick(&mut self) -> HourOffset {
        self.hour = self.hour.next();
        tracing::debug!(hour = %self.hour, "hour tick");
        self.hour
    }
}

/// What the dashboard shows for one state.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub location: String,
    pub condition: Option<String>,
    pub window: WindowedSeries,
    /// Kind that [`Direction::Next`] would activate
    pub next: ViewKind,
    /// Kind that [`Direction::Previous`] would activate
    pub previous: ViewKind,
}

impl Selection {
    pub fn kind(&self) -> ViewKind {
        self.window.kind()
    }

    /// Name of the view one step away in `direction`.
    pub fn adjacent(&self, direction: Direction) -> ViewKind {
        match direction {
            Direction::Next => self.next,
            Direction::Previous => self.previous,
        }
    }

    /// `"Location | Condition"` headline.
    pub fn headline(&self) -> String {
        match &self.condition {
            Some(condition) => format!("{} | {}", self.location, condition),
            None => self.location.clone(),
        }
    }
}

/// Fetch and window the series for `state`.
pub fn select<S: DataSource + ?Sized>(
    source: &S,
    state: &DashState,
) -> Result<Selection, DashError> {
    let kind = state.view();
    let series = source
        .lookup(state.location(), kind)
        .ok_or_else(|| DashError::UnknownLocation(state.location().to_string()))?;

    let window = WindowedSeries::new(kind, series, state.hour())?;

    Ok(Selection {
        location: state.location().to_string(),
        condition: source.condition(state.location()).map(str::to_string),
        window,
        next: state.cycle().peek(Direction::Next),
        previous: state.cycle().peek(Direction::Previous),
    })
}
