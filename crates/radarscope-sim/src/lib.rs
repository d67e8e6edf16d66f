//! Traffic generation for RADARSCOPE.
//!
//! Owns the active aircraft collection, the seeded random source and the
//! id counter, and places each new aircraft around the airfield.

pub mod generators;
pub mod placement;
pub mod scope;
pub mod settings;

pub use scope::{CommandOutcome, ScopeConfig, ScopeError, TrafficScope};
pub use settings::{SettingsError, SpawnSettings};
