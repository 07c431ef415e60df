//! Procedural elevation generation.
//!
//! Elevation is a fractal sum of Perlin octaves sampled at
//! `(col / scale, row / scale)`. With `tileable` set the sample point is
//! mapped onto a 4D torus whose circles have circumference `size / scale`,
//! so the field wraps with period `size` on both axes and the map tiles
//! seamlessly at its own edges.

use std::f64::consts::TAU;

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use terrawalk_common::{TerrawalkError, TerrawalkResult};
use tracing::debug;

use crate::grid::ElevationGrid;
use crate::terrain::ElevationConvention;

/// Largest noise-space coordinate the gradient lattice hashes safely.
pub const MAX_SAMPLE_COORDINATE: f64 = (1u64 << 40) as f64;

/// Noise field generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width and height in cells
    pub size: usize,
    /// Feature wavelength in cells (larger = smoother)
    pub scale: f64,
    /// Number of summed noise layers
    pub octaves: u32,
    /// Amplitude multiplier per octave, in (0, 1]
    pub persistence: f64,
    /// Frequency multiplier per octave, > 1
    pub lacunarity: f64,
    /// Noise base
    pub seed: u32,
    /// Raw or min-max normalized output
    pub convention: ElevationConvention,
    /// Wrap the noise domain with period `size`
    pub tileable: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 60,
            scale: 10.0,
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 0,
            convention: ElevationConvention::Normalized,
            tileable: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config for a `size` x `size` map, other fields default.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> TerrawalkResult<()> {
        if self.size == 0 {
            return Err(TerrawalkError::invalid_parameter("size", "must be positive"));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(TerrawalkError::invalid_parameter(
                "scale",
                format!("must be positive and finite, got {}", self.scale),
            ));
        }
        if self.octaves == 0 {
            return Err(TerrawalkError::invalid_parameter("octaves", "must be positive"));
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(TerrawalkError::invalid_parameter(
                "persistence",
                format!("must be in (0, 1], got {}", self.persistence),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 1.0) {
            return Err(TerrawalkError::invalid_parameter(
                "lacunarity",
                format!("must be greater than 1, got {}", self.lacunarity),
            ));
        }
        let top_frequency = self
            .lacunarity
            .powi(i32::try_from(self.octaves - 1).unwrap_or(i32::MAX));
        let top_coordinate = self.size as f64 / self.scale * top_frequency;
        if !(top_coordinate.is_finite() && top_coordinate <= MAX_SAMPLE_COORDINATE) {
            return Err(TerrawalkError::invalid_parameter(
                "octaves",
                format!(
                    "{} octaves at lacunarity {} push noise coordinates past {}",
                    self.octaves, self.lacunarity, MAX_SAMPLE_COORDINATE
                ),
            ));
        }
        Ok(())
    }
}

/// Deterministic fractal noise field generator.
pub struct NoiseFieldGenerator {
    /// Validated configuration
    config: GeneratorConfig,
    /// Gradient noise source
    perlin: Perlin,
}

impl std::fmt::Debug for NoiseFieldGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseFieldGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NoiseFieldGenerator {
    /// Creates a generator, failing fast on an invalid config.
    pub fn new(config: GeneratorConfig) -> TerrawalkResult<Self> {
        config.validate()?;
        let perlin = Perlin::new(config.seed);
        Ok(Self { config, perlin })
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a grid in the configured convention.
    #[must_use]
    pub fn generate(&self) -> ElevationGrid {
        match self.config.convention {
            ElevationConvention::Raw => self.generate_raw(),
            ElevationConvention::Normalized => self.generate_normalized(),
        }
    }

    /// Generates unnormalized fractal noise, roughly in [-1, 1].
    #[must_use]
    pub fn generate_raw(&self) -> ElevationGrid {
        let size = self.config.size;
        let mut samples = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                samples.push(self.sample(col as f64, row as f64));
            }
        }
        self.wrap(ElevationConvention::Raw, samples)
    }

    /// Generates fractal noise min-max rescaled over the whole grid to [0, 1].
    ///
    /// A flat grid, including the single-cell case, maps to 0.0 everywhere.
    #[must_use]
    pub fn generate_normalized(&self) -> ElevationGrid {
        let raw = self.generate_raw();
        let (min, max) = raw.min_max();
        let range = max - min;
        debug!(min, max, "normalizing elevation grid");

        let samples = raw
            .samples()
            .iter()
            .map(|&v| if range > 0.0 { (v - min) / range } else { 0.0 })
            .collect();
        self.wrap(ElevationConvention::Normalized, samples)
    }

    /// Fractal sum at a cell, divided by the total amplitude.
    fn sample(&self, col: f64, row: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..self.config.octaves {
            total += self.octave(col, row, frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.config.persistence;
            frequency *= self.config.lacunarity;
        }

        total / max_amplitude
    }

    /// One layer of gradient noise at the given frequency.
    fn octave(&self, col: f64, row: f64, frequency: f64) -> f64 {
        let scale = self.config.scale;
        if !self.config.tileable {
            return self
                .perlin
                .get([col / scale * frequency, row / scale * frequency]);
        }

        let size = self.config.size as f64;
        let radius = size / scale / TAU * frequency;
        let theta_x = TAU * col / size;
        let theta_y = TAU * row / size;
        self.perlin.get([
            radius * theta_x.cos(),
            radius * theta_x.sin(),
            radius * theta_y.cos(),
            radius * theta_y.sin(),
        ])
    }

    fn wrap(&self, convention: ElevationConvention, samples: Vec<f64>) -> ElevationGrid {
        ElevationGrid::from_parts(self.config.size, convention, samples)
    }
}

/// Generates an elevation grid from `config` in one call.
pub fn generate(config: &GeneratorConfig) -> TerrawalkResult<ElevationGrid> {
    Ok(NoiseFieldGenerator::new(config.clone())?.generate())
}
