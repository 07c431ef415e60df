//! # Terrawalk World
//!
//! Terrain generation for Terrawalk.
//!
//! This crate handles:
//! - Fractal noise elevation fields (raw or normalized)
//! - Elevation band classification into terrain categories
//! - The walkability predicate agents move against

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod generation;
pub mod grid;
pub mod map;
pub mod terrain;
pub mod walkability;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::generation::*;
    pub use crate::grid::*;
    pub use crate::map::*;
    pub use crate::terrain::*;
    pub use crate::walkability::*;
}

pub use prelude::*;
