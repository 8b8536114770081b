//! # View Cycle
//!
//! Tracks which [`ViewKind`] is on screen. The three kinds form a closed
//! ring (Temperature → Precipitation → Moisture → Temperature), so every
//! step in either direction lands on a valid kind and there is no terminal
//! state.

use crate::{Direction, ViewKind};

/// The active-view state machine.
///
/// Starts at [`ViewKind::Temperature`]. [`ViewCycle::advance`] is the only
/// way to change the active kind, one cyclic step at a time.
///
/// # Example
/// ```
/// use weather_dash_lib::{view_cycle::ViewCycle, Direction, ViewKind};
///
/// let mut cycle = ViewCycle::new();
/// assert_eq!(cycle.peek(Direction::Previous), ViewKind::Moisture);
/// assert_eq!(cycle.advance(Direction::Next), ViewKind::Precipitation);
/// assert_eq!(cycle.active(), ViewKind::Precipitation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewCycle {
    active: ViewKind,
}

impl Default for ViewCycle {
    fn default() -> Self {
        ViewCycle {
            active: ViewKind::Temperature,
        }
    }
}

impl ViewCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ViewKind {
        self.active
    }

    /// The kind one step away in `direction`, without changing state.
    pub fn peek(&self, direction: Direction) -> ViewKind {
        let len = ViewKind::ALL.len() as isize;
        let mut index = self.active.index() as isize + direction.step();
        if index < 0 {
            index = len - 1;
        } else if index >= len {
            index = 0;
        }
        ViewKind::ALL[index as usize]
    }

    /// Step one kind in `direction` and return the new active kind.
    pub fn advance(&mut self, direction: Direction) -> ViewKind {
        let next = self.peek(direction);
        tracing::debug!(from = %self.active, to = %next, ?direction, "view changed");
        self.active = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_temperature() {
        assert_eq!(ViewCycle::new().active(), ViewKind::Temperature);
    }

    #[test]
    fn test_next_cycle_closes_after_three_steps() {
        let mut cycle = ViewCycle::new();
        let visited: Vec<ViewKind> = (0..4).map(|_| cycle.advance(Direction::Next)).collect();
        assert_eq!(
            visited,
            vec![
                ViewKind::Precipitation,
                ViewKind::Moisture,
                ViewKind::Temperature,
                ViewKind::Precipitation,
            ]
        );

        let mut cycle = ViewCycle::new();
        for _ in 0..3 {
            cycle.advance(Direction::Next);
        }
        assert_eq!(cycle.active(), ViewKind::Temperature);
    }

    #[test]
    fn test_previous_cycle_runs_in_reverse() {
        let mut cycle = ViewCycle::new();
        let visited: Vec<ViewKind> = (0..3)
            .map(|_| cycle.advance(Direction::Previous))
            .collect();
        assert_eq!(
            visited,
            vec![
                ViewKind::Moisture,
                ViewKind::Precipitation,
                ViewKind::Temperature,
            ]
        );
    }

    #[test]
    fn test_boundary_wrap() {
        let mut cycle = ViewCycle::new();
        assert_eq!(cycle.advance(Direction::Previous), ViewKind::Moisture);
        assert_eq!(cycle.advance(Direction::Next), ViewKind::Temperature);
    }

    #[test]
    fn test_peek_agrees_with_advance() {
        let mut cycle = ViewCycle::new();
        for step in 0..9 {
            let direction = if step % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            let before = cycle;
            let peeked = cycle.peek(direction);
            assert_eq!(cycle, before, "peek must not mutate");
            assert_eq!(cycle.advance(direction), peeked);
        }
    }

    #[test]
    fn test_next_then_previous_returns_home() {
        for start_steps in 0..3 {
            let mut cycle = ViewCycle::new();
            for _ in 0..start_steps {
                cycle.advance(Direction::Next);
            }
            let home = cycle.active();
            cycle.advance(Direction::Next);
            assert_eq!(cycle.advance(Direction::Previous), home);
        }
    }
}
