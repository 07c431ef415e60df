//! Terrain categories and elevation band classification.
//!
//! A [`BandSet`] holds the four ascending thresholds that split the
//! elevation line into five half-open, lower-inclusive bands. There is one
//! band set per [`ElevationConvention`]; the classifier and the walkability
//! predicate both read from it.

use serde::{Deserialize, Serialize};
use terrawalk_common::{TerrawalkError, TerrawalkResult};

use crate::grid::{ElevationGrid, TerrainGrid};

/// Discrete terrain class of a single cell.
///
/// Variants are declared in ascending elevation order, so the derived
/// `Ord` matches the band order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainCategory {
    /// Below the water line
    Water,
    /// Lowest land band
    Plains,
    /// Middle land band
    Hills,
    /// Highest walkable band
    Mountains,
    /// Impassable summits
    HighPeaks,
}

impl TerrainCategory {
    /// All categories in ascending elevation order.
    pub const ALL: [Self; 5] = [
        Self::Water,
        Self::Plains,
        Self::Hills,
        Self::Mountains,
        Self::HighPeaks,
    ];

    /// Whether an agent may stand on this category.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Plains | Self::Hills | Self::Mountains)
    }

    /// Position in [`TerrainCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Plains => "plains",
            Self::Hills => "hills",
            Self::Mountains => "mountains",
            Self::HighPeaks => "high_peaks",
        }
    }
}

impl std::fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value range an elevation grid was produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationConvention {
    /// Unnormalized fractal noise, roughly [-1, 1]
    Raw,
    /// Min-max rescaled to exactly [0, 1]
    #[default]
    Normalized,
}

impl ElevationConvention {
    /// The band set that classifies elevations of this convention.
    #[must_use]
    pub const fn bands(self) -> &'static BandSet {
        match self {
            Self::Raw => &BandSet::RAW,
            Self::Normalized => &BandSet::NORMALIZED,
        }
    }
}

/// Ascending elevation thresholds separating the five terrain bands.
///
/// `thresholds[i]` is the inclusive lower edge of `TerrainCategory::ALL[i + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSet {
    /// Lower edges of Plains, Hills, Mountains, HighPeaks
    pub thresholds: [f64; 4],
}

impl BandSet {
    /// Bands for min-max normalized elevation.
    pub const NORMALIZED: Self = Self {
        thresholds: [0.2, 0.4, 0.6, 0.8],
    };

    /// Bands for raw fractal noise elevation.
    pub const RAW: Self = Self {
        thresholds: [-0.06, 0.15, 0.3, 0.4],
    };

    /// Lower edge of the first walkable band.
    #[must_use]
    pub const fn water_line(&self) -> f64 {
        self.thresholds[0]
    }

    /// Lower edge of the first non-walkable band above land.
    #[must_use]
    pub const fn peak_line(&self) -> f64 {
        self.thresholds[3]
    }

    /// Maps an elevation to its category.
    ///
    /// Bands are evaluated in increasing order and the first match wins.
    pub fn classify(&self, elevation: f64) -> TerrawalkResult<TerrainCategory> {
        if !elevation.is_finite() {
            return Err(TerrawalkError::InvalidInput(format!(
                "elevation {elevation} is not finite"
            )));
        }
        let band = self
            .thresholds
            .iter()
            .position(|&edge| elevation < edge)
            .unwrap_or(self.thresholds.len());
        Ok(TerrainCategory::ALL[band])
    }

    /// Whether `elevation` lies in `[water_line, peak_line)`.
    ///
    /// Non-finite elevations are never walkable.
    #[must_use]
    pub fn is_walkable_elevation(&self, elevation: f64) -> bool {
        elevation >= self.water_line() && elevation < self.peak_line()
    }
}

/// Classifies a normalized elevation with the canonical band set.
pub fn classify(elevation: f64) -> TerrawalkResult<TerrainCategory> {
    BandSet::NORMALIZED.classify(elevation)
}

/// Classifies every cell of `grid` with the band set of its own convention.
///
/// Fails on the first non-finite sample; no partial grid is returned.
pub fn classify_grid(grid: &ElevationGrid) -> TerrawalkResult<TerrainGrid> {
    let bands = grid.convention().bands();
    let cells = grid
        .samples()
        .iter()
        .map(|&elevation| bands.classify(elevation))
        .collect::<TerrawalkResult<Vec<_>>>()?;
    Ok(TerrainGrid::new(grid.size(), cells))
}
