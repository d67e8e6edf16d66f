//! Spawn tuning and respawn-count parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use radarscope_core::constants::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettingsError {
    #[error("spawn.{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("spawn.default_count ({default_count}) must be within [1, max_count = {max_count}]")]
    InvalidCountBounds { default_count: u32, max_count: u32 },
}

/// Tunable parameters for the placement algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Ring radius for non-radial spawns.
    pub distance: f64,
    /// Chance of spawning on a radial when any are loaded.
    pub radial_probability: f64,
    /// Chance of perturbing the inbound heading.
    pub deviation_probability: f64,
    /// Largest perturbation in either direction (degrees).
    pub max_deviation_deg: f64,
    /// Radial samples start this fraction of the path length from its start.
    pub radial_min_fraction: f64,
    /// Radial samples keep at least this fraction of `distance` from the
    /// airfield center.
    pub radial_min_range_fraction: f64,
    pub default_count: u32,
    pub max_count: u32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            distance: SPAWN_DISTANCE,
            radial_probability: RADIAL_SPAWN_PROBABILITY,
            deviation_probability: HEADING_DEVIATION_PROBABILITY,
            max_deviation_deg: MAX_HEADING_DEVIATION_DEG,
            radial_min_fraction: 0.0,
            radial_min_range_fraction: RADIAL_MIN_RANGE_FRACTION,
            default_count: DEFAULT_SPAWN_COUNT,
            max_count: MAX_SPAWN_COUNT,
        }
    }
}

impl SpawnSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_range("radial_probability", self.radial_probability, 0.0, 1.0)?;
        check_range("deviation_probability", self.deviation_probability, 0.0, 1.0)?;
        check_range("radial_min_fraction", self.radial_min_fraction, 0.0, 1.0)?;
        check_range(
            "radial_min_range_fraction",
            self.radial_min_range_fraction,
            0.0,
            1.0,
        )?;
        check_range("max_deviation_deg", self.max_deviation_deg, 0.0, 180.0)?;
        check_range("distance", self.distance, 0.0, f64::MAX)?;
        if self.default_count < MIN_SPAWN_COUNT || self.default_count > self.max_count {
            return Err(SettingsError::InvalidCountBounds {
                default_count: self.default_count,
                max_count: self.max_count,
            });
        }
        Ok(())
    }

    /// Closest a radial spawn may sit to the airfield center.
    pub fn radial_min_range(&self) -> f64 {
        self.radial_min_range_fraction * self.distance
    }

    /// Read the respawn control. Anything that is not an integer in
    /// `[1, max_count]` falls back to `default_count`.
    pub fn parse_count(&self, input: &str) -> u32 {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) if n >= i64::from(MIN_SPAWN_COUNT) && n <= i64::from(self.max_count) => n as u32,
            _ => {
                log::warn!(
                    "Spawn count {trimmed:?} is not within [{MIN_SPAWN_COUNT}, {}]; using {}",
                    self.max_count,
                    self.default_count
                );
                self.default_count
            }
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SettingsError> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
