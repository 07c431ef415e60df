//! Cardinal movement directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TerrawalkError;

/// Direction an agent moves or faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row (default facing)
    #[default]
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// All directions, in sprite-sheet row order.
    pub const ALL: [Self; 4] = [Self::Down, Self::Up, Self::Left, Self::Right];

    /// Grid offset `(dx, dy)` of a single step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Lowercase name, the same token [`Direction::from_str`] accepts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = TerrawalkError;

    /// Parses `up`/`down`/`left`/`right` (case-insensitive) and the
    /// `w`/`s`/`a`/`d` key shorthands.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Self::Up),
            "down" | "s" => Ok(Self::Down),
            "left" | "a" => Ok(Self::Left),
            "right" | "d" => Ok(Self::Right),
            other => Err(TerrawalkError::invalid_parameter(
                "direction",
                format!("unrecognized direction token {other:?}"),
            )),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
