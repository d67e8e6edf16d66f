//! Display surface interface.
//!
//! The core treats the display purely as a sink: aircraft are pushed to it,
//! and nothing is read back except the handle returned by `render`.

use crate::aircraft::{Aircraft, RenderHandle};

pub trait DisplaySurface {
    /// Draw an aircraft group positioned at (x, y) and rotated by its heading.
    fn render(&mut self, aircraft: &Aircraft) -> RenderHandle;

    /// Remove every rendered aircraft. Static map layers stay.
    fn clear(&mut self);

    /// Re-apply position and rotation to an existing aircraft group.
    fn refresh(&mut self, handle: RenderHandle, x: f64, y: f64, heading: f64);
}
