//! The aircraft entity and its identifiers.
//!
//! `Aircraft` is a plain data holder. Display refreshes are issued by
//! whoever owns both the entity and the `DisplaySurface`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::SpawnOrigin;
use crate::types::Position;

/// Unique aircraft identifier, allocated from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AircraftId(u64);

impl AircraftId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ac-{}", self.0)
    }
}

impl FromStr for AircraftId {
    type Err = std::num::ParseIntError;

    /// Accepts both `ac-7` and a bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix("ac-").unwrap_or(s.trim());
        digits.parse().map(AircraftId)
    }
}

/// Opaque reference to an aircraft's on-screen representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderHandle(usize);

impl RenderHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("aircraft {id} already has render handle {existing:?}")]
    HandleAlreadyAttached {
        id: AircraftId,
        existing: RenderHandle,
    },
}

/// A single aircraft on the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    id: AircraftId,
    callsign: String,
    pub x: f64,
    pub y: f64,
    /// Altitude band in tens of feet (1000 = FL100).
    pub level: u32,
    /// Speed band in tens of knots (31 = 310 kt).
    pub speed: u32,
    /// Degrees, 0 = up, clockwise. Not normalized.
    pub heading: f64,
    origin: SpawnOrigin,
    render_handle: Option<RenderHandle>,
}

impl Aircraft {
    pub fn new(
        id: AircraftId,
        callsign: impl Into<String>,
        x: f64,
        y: f64,
        level: u32,
        speed: u32,
        heading: f64,
    ) -> Self {
        Self {
            id,
            callsign: callsign.into(),
            x,
            y,
            level,
            speed,
            heading,
            origin: SpawnOrigin::default(),
            render_handle: None,
        }
    }

    /// Record which placement branch produced this aircraft.
    pub fn with_origin(mut self, origin: SpawnOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn id(&self) -> AircraftId {
        self.id
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn origin(&self) -> SpawnOrigin {
        self.origin
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn render_handle(&self) -> Option<RenderHandle> {
        self.render_handle
    }

    /// Flight level as three zero-padded digits (level 1000 -> "100").
    pub fn formatted_level(&self) -> String {
        format!("{:03}", self.level / 10)
    }

    /// Speed band as two zero-padded digits.
    pub fn formatted_speed(&self) -> String {
        format!("{:02}", self.speed)
    }

    /// The two label lines: callsign, then "level speed".
    pub fn label_lines(&self) -> [String; 2] {
        [
            self.callsign.clone(),
            format!("{} {}", self.formatted_level(), self.formatted_speed()),
        ]
    }

    /// Move the aircraft. Pure data; the caller refreshes the display.
    pub fn update_position(&mut self, new_x: f64, new_y: f64) {
        self.x = new_x;
        self.y = new_y;
    }

    /// Attach the render handle. A handle can only be set once.
    pub fn attach_render_handle(&mut self, handle: RenderHandle) -> Result<(), EntityError> {
        if let Some(existing) = self.render_handle {
            return Err(EntityError::HandleAlreadyAttached {
                id: self.id,
                existing,
            });
        }
        self.render_handle = Some(handle);
        Ok(())
    }
}
