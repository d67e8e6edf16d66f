//! Enumeration types used throughout the display.

use serde::{Deserialize, Serialize};

/// Which placement branch produced an aircraft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SpawnOrigin {
    /// Constructed directly, not by the placement algorithm.
    #[default]
    Unspecified,
    /// Sampled along the radial at this index of the loaded radial list.
    Radial { radial_index: usize },
    /// Placed on the fixed-distance ring around the airfield.
    Ring,
}

impl SpawnOrigin {
    pub fn is_radial(&self) -> bool {
        matches!(self, SpawnOrigin::Radial { .. })
    }
}
