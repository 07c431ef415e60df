//! Generated terrain map: elevation plus the terrain derived from it.

use terrawalk_common::{GridCoord, TerrawalkResult};
use tracing::{debug, info};

use crate::generation::{GeneratorConfig, NoiseFieldGenerator};
use crate::grid::{ElevationGrid, TerrainGrid};
use crate::terrain::{classify_grid, TerrainCategory};
use crate::walkability;

/// Elevation and terrain grids of one session.
///
/// Both grids are fixed at construction, so the terrain always matches
/// the classification of the elevation underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMap {
    /// Elevation samples
    elevation: ElevationGrid,
    /// Categories derived from `elevation`
    terrain: TerrainGrid,
}

impl TerrainMap {
    /// Classifies an existing elevation grid.
    pub fn from_elevation(elevation: ElevationGrid) -> TerrawalkResult<Self> {
        let terrain = classify_grid(&elevation)?;
        Ok(Self { elevation, terrain })
    }

    /// Grid dimension.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.elevation.size()
    }

    /// Elevation grid.
    #[must_use]
    pub const fn elevation(&self) -> &ElevationGrid {
        &self.elevation
    }

    /// Terrain grid.
    #[must_use]
    pub const fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// Category at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn category_at(&self, coord: GridCoord) -> Option<TerrainCategory> {
        self.terrain.get(coord)
    }

    /// Whether the cell at `(x, y)` may be stepped on.
    #[must_use]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        walkability::is_walkable(&self.elevation, x, y)
    }

    /// First walkable cell in row-major order.
    #[must_use]
    pub fn first_walkable(&self) -> Option<GridCoord> {
        let size = self.size();
        (0..size * size)
            .map(|index| GridCoord::from_index(index, size))
            .find(|coord| self.is_walkable(coord.x, coord.y))
    }
}

/// Generates elevation from `config` and classifies it.
pub fn generate_terrain(config: &GeneratorConfig) -> TerrawalkResult<TerrainMap> {
    let generator = NoiseFieldGenerator::new(config.clone())?;
    let map = TerrainMap::from_elevation(generator.generate())?;

    let (min, max) = map.elevation().min_max();
    info!(
        "Generated {}x{} terrain: seed={}, convention={:?}, tileable={}",
        config.size, config.size, config.seed, config.convention, config.tileable
    );
    debug!(min, max, histogram = ?map.terrain().histogram(), "terrain statistics");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::ElevationConvention;

    fn scenario_map() -> TerrainMap {
        let elevation = ElevationGrid::from_rows(
            vec![
                vec![0.9, 0.1, 0.5],
                vec![0.1, 0.5, 0.9],
                vec![0.5, 0.9, 0.1],
            ],
            ElevationConvention::Normalized,
        )
        .expect("square rows");
        TerrainMap::from_elevation(elevation).expect("finite samples")
    }

    #[test]
    fn test_scenario_map() {
        let map = scenario_map();
        assert_eq!(map.size(), 3);
        assert_eq!(
            map.category_at(GridCoord::new(1, 0)),
            Some(TerrainCategory::Water)
        );
        assert_eq!(
            map.category_at(GridCoord::new(2, 0)),
            Some(TerrainCategory::Hills)
        );
        assert!(!map.is_walkable(1, 0));
        assert!(map.is_walkable(2, 0));
        assert_eq!(map.first_walkable(), Some(GridCoord::new(2, 0)));
    }

    #[test]
    fn test_terrain_tracks_elevation_everywhere() {
        for convention in [ElevationConvention::Raw, ElevationConvention::Normalized] {
            let map = generate_terrain(&GeneratorConfig {
                size: 20,
                convention,
                ..Default::default()
            })
            .expect("valid config");
            let bands = convention.bands();
            for (elevation, category) in map
                .elevation()
                .samples()
                .iter()
                .zip(map.terrain().cells())
            {
                assert_eq!(bands.classify(*elevation).as_ref(), Ok(category));
            }
        }
    }

    #[test]
    fn test_walkability_agrees_with_terrain() {
        let map = generate_terrain(&GeneratorConfig::with_size(24)).expect("valid config");
        let size = map.size() as i32;
        for y in 0..size {
            for x in 0..size {
                let category = map
                    .category_at(GridCoord::new(x, y))
                    .expect("in bounds");
                assert_eq!(map.is_walkable(x, y), category.is_walkable(), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_no_walkable_cell() {
        let elevation = ElevationGrid::from_rows(
            vec![vec![0.0, 0.9], vec![0.1, 1.0]],
            ElevationConvention::Normalized,
        )
        .expect("square rows");
        let map = TerrainMap::from_elevation(elevation).expect("finite samples");
        assert_eq!(map.first_walkable(), None);
    }

    #[test]
    fn test_invalid_config_propagates() {
        let result = generate_terrain(&GeneratorConfig {
            scale: 0.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
