//! Display commands issued by the operator console.

use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftId;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DisplayCommand {
    /// Clear the display and spawn a fresh batch of aircraft.
    Respawn { count: u32 },
    /// Move one aircraft and refresh its marker.
    MoveAircraft { id: AircraftId, x: f64, y: f64 },
    /// End the session.
    Quit,
}
