//! Cardinal movement directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::QuestError;

/// One grid step up, down, left or right. Row 0 is the top of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Column / row delta for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a raw delta back to a direction.
    ///
    /// # Errors
    /// - `InvalidDirection` unless the delta is exactly one of the four unit steps
    pub fn from_delta(dx: i32, dy: i32) -> Result<Direction, QuestError> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(QuestError::InvalidDirection { dx, dy }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = QuestError;

    /// Single letters are WASD or vi keys only; compass directions must be spelled out,
    /// so `w` is up, never west.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "north" | "w" | "k" => Ok(Direction::Up),
            "down" | "south" | "s" | "j" => Ok(Direction::Down),
            "left" | "west" | "a" | "h" => Ok(Direction::Left),
            "right" | "east" | "d" | "l" => Ok(Direction::Right),
            _ => Err(QuestError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_round_trip_through_from_delta() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Ok(dir));
        }
    }

    #[test]
    fn diagonal_and_long_steps_are_rejected() {
        assert_eq!(
            Direction::from_delta(1, 1),
            Err(QuestError::InvalidDirection { dx: 1, dy: 1 })
        );
        assert!(Direction::from_delta(0, 2).is_err());
        assert!(Direction::from_delta(0, 0).is_err());
    }

    #[test]
    fn parses_names_and_keys() {
        assert_eq!("North".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" east ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(QuestError::UnknownDirection("sideways".into()))
        );
    }

    #[test]
    fn single_letters_follow_wasd_not_the_compass() {
        assert_eq!("w".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("west".parse::<Direction>(), Ok(Direction::Left));
        for compass in ["n", "e"] {
            assert!(compass.parse::<Direction>().is_err());
        }
    }
}
