//! # Navigation Controls
//!
//! Maps user input onto view-cycle steps. Gestures and arrow buttons are
//! translated into a [`Direction`] in one place, and the hint printed beside
//! each arrow is computed from that same mapping, so the hint always names
//! the view the control will actually open.
//!
//! | Control     | Direction  |
//! |-------------|------------|
//! | swipe left  | `Next`     |
//! | swipe right | `Previous` |
//! | → button    | `Next`     |
//! | ← button    | `Previous` |

use crate::view_cycle::ViewCycle;
use crate::{Direction, ViewKind};
use std::str::FromStr;

/// A physical navigation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    SwipeLeft,
    SwipeRight,
    ArrowLeft,
    ArrowRight,
}

impl Control {
    pub fn direction(self) -> Direction {
        match self {
            Control::SwipeLeft | Control::ArrowRight => Direction::Next,
            Control::SwipeRight | Control::ArrowLeft => Direction::Previous,
        }
    }

    /// The view this control would open from the current state.
    pub fn hint(self, cycle: &ViewCycle) -> ViewKind {
        cycle.peek(self.direction())
    }
}

/// A line of input in interactive mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Navigate(Control),
    SelectLocation(String),
    ListLocations,
    /// Advance the hour manually, as the hourly timer would
    Tick,
    Quit,
}

/// Input line that matched no command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised command: {0:?} (try n, p, loc <name>, list, tick, q)")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("n" | "next" | "right" | ">", "") => Command::Navigate(Control::ArrowRight),
            ("p" | "prev" | "previous" | "left" | "<", "") => {
                Command::Navigate(Control::ArrowLeft)
            }
            ("swipe", side) if side.eq_ignore_ascii_case("left") => {
                Command::Navigate(Control::SwipeLeft)
            }
            ("swipe", side) if side.eq_ignore_ascii_case("right") => {
                Command::Navigate(Control::SwipeRight)
            }
            ("loc" | "location", name) if !name.is_empty() => {
                Command::SelectLocation(name.to_string())
            }
            ("list" | "ls", "") => Command::ListLocations,
            ("tick", "") => Command::Tick,
            ("q" | "quit" | "exit", "") => Command::Quit,
            _ => return Err(ParseCommandError(line.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_and_arrow_agree() {
        assert_eq!(Control::SwipeLeft.direction(), Control::ArrowRight.direction());
        assert_eq!(Control::SwipeRight.direction(), Control::ArrowLeft.direction());
        assert_ne!(Control::ArrowLeft.direction(), Control::ArrowRight.direction());
    }

    #[test]
    fn test_hint_matches_outcome() {
        for control in [
            Control::SwipeLeft,
            Control::SwipeRight,
            Control::ArrowLeft,
            Control::ArrowRight,
        ] {
            let mut cycle = ViewCycle::new();
            let hint = control.hint(&cycle);
            assert_eq!(cycle.advance(control.direction()), hint, "{control:?}");
        }
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!("n".parse::<Command>(), Ok(Command::Navigate(Control::ArrowRight)));
        assert_eq!(" > ".parse::<Command>(), Ok(Command::Navigate(Control::ArrowRight)));
        assert_eq!("LEFT".parse::<Command>(), Ok(Command::Navigate(Control::ArrowLeft)));
        assert_eq!(
            "swipe left".parse::<Command>(),
            Ok(Command::Navigate(Control::SwipeLeft))
        );
    }

    #[test]
    fn test_parse_swipe_ignores_case() {
        assert_eq!(
            "SWIPE LEFT".parse::<Command>(),
            Ok(Command::Navigate(Control::SwipeLeft))
        );
        assert_eq!(
            "swipe Right".parse::<Command>(),
            Ok(Command::Navigate(Control::SwipeRight))
        );
        assert!("swipe up".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_location_keeps_spaces() {
        assert_eq!(
            "loc New York".parse::<Command>(),
            Ok(Command::SelectLocation("New York".to_string()))
        );
        assert!("loc".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!("list".parse::<Command>(), Ok(Command::ListLocations));
        assert_eq!("tick".parse::<Command>(), Ok(Command::Tick));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert!("dance".parse::<Command>().is_err());
        assert!("n extra".parse::<Command>().is_err());
    }
}
