//! SVG display surface for RADARSCOPE.
//!
//! Renders aircraft groups over the static airfield map and loads the
//! map document that supplies the radial corridors.

pub mod map;
pub mod surface;

pub use map::{MapDocument, MapError, MapLayer, MapPath};
pub use surface::{SurfaceStyle, SvgSurface};
