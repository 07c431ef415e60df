//! Grid coordinate types.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Cell coordinate on a square terrain grid.
///
/// `x` is the column and `y` is the row. Signed so that one-step offsets
/// off the top or left edge stay representable and can be bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring coordinate one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Checks whether this coordinate lies inside a `size` x `size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }

    /// Converts to a row-major index for a `size` x `size` grid.
    ///
    /// Returns `None` when the coordinate is out of bounds.
    #[must_use]
    pub const fn to_index(self, size: usize) -> Option<usize> {
        if self.in_bounds(size) {
            Some((self.y as usize) * size + (self.x as usize))
        } else {
            None
        }
    }

    /// Creates from a row-major index.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: (index % size) as i32,
            y: (index / size) as i32,
        }
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_offsets() {
        let origin = GridCoord::new(1, 1);
        assert_eq!(origin.step(Direction::Up), GridCoord::new(1, 0));
        assert_eq!(origin.step(Direction::Down), GridCoord::new(1, 2));
        assert_eq!(origin.step(Direction::Left), GridCoord::new(0, 1));
        assert_eq!(origin.step(Direction::Right), GridCoord::new(2, 1));
    }

    #[test]
    fn test_bounds_edges() {
        assert!(GridCoord::new(0, 0).in_bounds(3));
        assert!(GridCoord::new(2, 2).in_bounds(3));
        assert!(!GridCoord::new(3, 0).in_bounds(3));
        assert!(!GridCoord::new(0, 3).in_bounds(3));
        assert!(!GridCoord::new(-1, 0).in_bounds(3));
        assert!(!GridCoord::new(0, -1).in_bounds(3));
        assert!(!GridCoord::new(0, 0).in_bounds(0));
    }

    #[test]
    fn test_index_conversion() {
        let coord = GridCoord::new(2, 1);
        assert_eq!(coord.to_index(4), Some(6));
        assert_eq!(GridCoord::from_index(6, 4), coord);
        assert_eq!(GridCoord::new(4, 0).to_index(4), None);
    }

    proptest! {
        #[test]
        fn prop_index_matches_bounds(x in -8i32..16, y in -8i32..16, size in 1usize..12) {
            let coord = GridCoord::new(x, y);
            prop_assert_eq!(coord.to_index(size).is_some(), coord.in_bounds(size));
            if let Some(index) = coord.to_index(size) {
                prop_assert_eq!(GridCoord::from_index(index, size), coord);
            }
        }
    }
}
