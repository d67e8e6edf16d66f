//! Core types and definitions for the RADARSCOPE traffic display.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the aircraft entity, radial geometry, the display surface interface,
//! commands, snapshots and constants. It has no dependency on a random
//! source or any rendering backend.

pub mod aircraft;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod geometry;
pub mod radial;
pub mod state;
pub mod surface;
pub mod types;

pub use aircraft::{Aircraft, AircraftId, EntityError, RenderHandle};
pub use radial::{PathDataError, Radial};
pub use surface::DisplaySurface;
pub use types::Position;

#[cfg(test)]
mod tests;
