//! Walkability predicate.

use terrawalk_common::GridCoord;

use crate::grid::ElevationGrid;

/// Whether the cell at `(x, y)` may be stepped on.
///
/// Out-of-bounds coordinates are never walkable. Inside the grid a cell is
/// walkable iff its elevation lies in `[water_line, peak_line)` of the band
/// set matching the grid's convention. Evaluated against the grid on every
/// call.
#[must_use]
pub fn is_walkable(grid: &ElevationGrid, x: i32, y: i32) -> bool {
    let coord = GridCoord::new(x, y);
    if !coord.in_bounds(grid.size()) {
        return false;
    }
    grid.get(coord)
        .is_some_and(|elevation| grid.convention().bands().is_walkable_elevation(elevation))
}
