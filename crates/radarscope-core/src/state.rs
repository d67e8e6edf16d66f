//! Traffic snapshot: the complete visible state after a spawn or update.

use serde::{Deserialize, Serialize};

use crate::aircraft::{Aircraft, AircraftId};
use crate::enums::SpawnOrigin;
use crate::types::Position;

/// Everything currently on the display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeSnapshot {
    /// Number of spawn passes run so far (1 after the first spawn).
    pub spawn_pass: u64,
    pub airfield: Position,
    pub radial_count: usize,
    pub aircraft: Vec<AircraftView>,
}

/// One aircraft as shown on the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub callsign: String,
    pub position: Position,
    pub level: u32,
    pub speed: u32,
    /// Degrees, 0 = up, clockwise.
    pub heading: f64,
    /// Text of the second label line.
    pub data_block: String,
    pub origin: SpawnOrigin,
}

impl From<&Aircraft> for AircraftView {
    fn from(aircraft: &Aircraft) -> Self {
        let [callsign, data_block] = aircraft.label_lines();
        Self {
            id: aircraft.id(),
            callsign,
            position: aircraft.position(),
            level: aircraft.level,
            speed: aircraft.speed,
            heading: aircraft.heading,
            data_block,
            origin: aircraft.origin(),
        }
    }
}
