//! # Terrawalk Engine
//!
//! Headless host for Terrawalk: configuration, the text renderer and the
//! isometric display transform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod app;
pub mod config;
pub mod iso;
pub mod renderer;
