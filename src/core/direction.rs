//! Move directions and the traversal table every move is written against.
//!
//! Each direction maps to four lines of four cell indices. A line is read
//! in traversal order (the first index is the edge tiles slide toward),
//! slid, and written back through the same indices. This keeps the
//! slide/merge logic direction-agnostic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::grid::SIDE;

/// One line of a move: four grid indices in traversal order.
pub type Line = [usize; SIDE];

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in code order (`0 = Up` .. `3 = Right`).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Numeric code of this direction.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Lines of this direction, each in traversal order.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// assert_eq!(Direction::Left.lines()[1], [4, 5, 6, 7]);
    /// assert_eq!(Direction::Down.lines()[0], [12, 8, 4, 0]);
    /// ```
    #[must_use]
    pub fn lines(self) -> [Line; SIDE] {
        std::array::from_fn(|i| {
            std::array::from_fn(|k| match self {
                Direction::Left => SIDE * i + k,
                Direction::Right => SIDE * i + (SIDE - 1 - k),
                Direction::Up => i + SIDE * k,
                Direction::Down => i + SIDE * (SIDE - 1 - k),
            })
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Accepts `up`/`down`/`left`/`right` in any case, and the browser key
    /// names `ArrowUp`/`ArrowDown`/`ArrowLeft`/`ArrowRight`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("Arrow").unwrap_or(trimmed);

        match name.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidArgument(format!(
                "unknown direction {s:?}, expected up, down, left or right"
            ))),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| {
                EngineError::InvalidArgument(format!("unknown direction code {code}, expected 0-3"))
            })
    }
}
