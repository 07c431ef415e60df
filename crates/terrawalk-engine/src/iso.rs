//! Isometric projection of grid cells to screen pixels.
//!
//! A cell `(x, y)` lands at `((x - y) * w/2, (x + y) * h/2)` with integer
//! halving. Cells left of the origin column project to negative screen x;
//! [`IsoProjection::origin_offset`] shifts a whole map into positive space.

use serde::{Deserialize, Serialize};
use terrawalk_common::GridCoord;

/// Pixel position of a tile's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal pixel
    pub x: i32,
    /// Vertical pixel
    pub y: i32,
}

/// Isometric tile geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoProjection {
    half_width: i32,
    half_height: i32,
}

impl IsoProjection {
    /// Creates a projection for tiles of the given pixel size.
    #[must_use]
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            half_width: i32::try_from(tile_width / 2).unwrap_or(i32::MAX),
            half_height: i32::try_from(tile_height / 2).unwrap_or(i32::MAX),
        }
    }

    /// Screen position of `cell`.
    #[must_use]
    pub const fn project(&self, cell: GridCoord) -> ScreenPoint {
        ScreenPoint {
            x: (cell.x - cell.y) * self.half_width,
            y: (cell.x + cell.y) * self.half_height,
        }
    }

    /// Shift that moves every cell of a `size`x`size` map to `x >= 0`.
    #[must_use]
    pub fn origin_offset(&self, size: usize) -> i32 {
        let last = i32::try_from(size.saturating_sub(1)).unwrap_or(i32::MAX);
        last.saturating_mul(self.half_width)
    }

    /// Pixel extent of a `size`x`size` map, tile corners included.
    #[must_use]
    pub fn map_extent(&self, size: usize) -> (i32, i32) {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        (
            size.saturating_mul(self.half_width * 2),
            size.saturating_mul(self.half_height * 2),
        )
    }

    /// Scroll position that centers a view of `view` pixels on `cell`.
    #[must_use]
    pub fn view_center(&self, cell: GridCoord, view: (i32, i32)) -> ScreenPoint {
        let point = self.project(cell);
        ScreenPoint {
            x: point.x + self.half_width - view.0 / 2,
            y: point.y + self.half_height - view.1 / 2,
        }
    }
}
