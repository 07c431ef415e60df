//! Square elevation and terrain grids.
//!
//! Both grids are stored row-major and indexed by [`GridCoord`], where `x`
//! is the column and `y` the row.

use serde::{Deserialize, Serialize};
use terrawalk_common::{GridCoord, TerrawalkError, TerrawalkResult};

use crate::terrain::{ElevationConvention, TerrainCategory};

/// Immutable square array of elevation samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationGrid {
    /// Width and height in cells
    size: usize,
    /// Value range the samples were produced in
    convention: ElevationConvention,
    /// Row-major samples
    samples: Vec<f64>,
}

impl ElevationGrid {
    /// Wraps row-major samples. `samples.len()` must equal `size * size`.
    pub fn from_samples(
        size: usize,
        convention: ElevationConvention,
        samples: Vec<f64>,
    ) -> TerrawalkResult<Self> {
        if size == 0 {
            return Err(TerrawalkError::invalid_parameter("size", "must be positive"));
        }
        if samples.len() != size * size {
            return Err(TerrawalkError::invalid_parameter(
                "samples",
                format!("expected {} samples, got {}", size * size, samples.len()),
            ));
        }
        Ok(Self {
            size,
            convention,
            samples,
        })
    }

    pub(crate) fn from_parts(
        size: usize,
        convention: ElevationConvention,
        samples: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(samples.len(), size * size);
        Self {
            size,
            convention,
            samples,
        }
    }

    /// Builds a grid from nested rows. Every row must be as long as there
    /// are rows.
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        convention: ElevationConvention,
    ) -> TerrawalkResult<Self> {
        let size = rows.len();
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TerrawalkError::invalid_parameter(
                "rows",
                format!("row {row} has {} cells, expected {size}", bad.len()),
            ));
        }
        Self::from_samples(size, convention, rows.into_iter().flatten().collect())
    }

    /// Grid dimension.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convention the samples follow.
    #[must_use]
    pub const fn convention(&self) -> ElevationConvention {
        self.convention
    }

    /// Elevation at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<f64> {
        coord
            .to_index(self.size)
            .and_then(|index| self.samples.get(index).copied())
    }

    /// Row-major samples.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.samples.chunks(self.size)
    }

    /// Smallest and largest sample.
    #[must_use]
    pub fn min_max(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// Square array of terrain categories, one per elevation sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainGrid {
    /// Width and height in cells
    size: usize,
    /// Row-major categories
    cells: Vec<TerrainCategory>,
}

impl TerrainGrid {
    pub(crate) fn new(size: usize, cells: Vec<TerrainCategory>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Grid dimension.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Category at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, coord: GridCoord) -> Option<TerrainCategory> {
        coord
            .to_index(self.size)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Row-major categories.
    #[must_use]
    pub fn cells(&self) -> &[TerrainCategory] {
        &self.cells
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[TerrainCategory]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of cells per category, indexed by [`TerrainCategory::index`].
    #[must_use]
    pub fn histogram(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for category in &self.cells {
            counts[category.index()] += 1;
        }
        counts
    }
}
