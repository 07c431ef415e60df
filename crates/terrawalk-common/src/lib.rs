//! # Terrawalk Common
//!
//! Common types shared across Terrawalk crates:
//! - Grid coordinates
//! - Movement directions
//! - Error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod direction;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::direction::*;
    pub use crate::error::*;
}

pub use prelude::*;
