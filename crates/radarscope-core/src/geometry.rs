//! Heading and ring geometry in screen coordinates.
//!
//! Screen space has y growing downward, so a heading of 0° points up
//! and headings increase clockwise.

use crate::types::Position;

/// Heading in degrees from point 1 toward point 2.
///
/// `atan2` measures from the +x axis; adding 90° moves zero to "up".
/// The result is not normalized and lies in (-90, 270].
pub fn heading_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dy.atan2(dx).to_degrees() + 90.0
}

/// Point at `distance` from `center` along `angle` (radians from +x, toward +y).
pub fn point_on_ring(center: Position, distance: f64, angle: f64) -> Position {
    Position::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
    )
}
