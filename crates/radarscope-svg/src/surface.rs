//! SVG rendering of the traffic display.
//!
//! Each aircraft is a `<g>` translated to its position and rotated by its
//! heading. The group holds a square marker centered on the position and a
//! label block offset to the right with the callsign and data block.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use radarscope_core::aircraft::{Aircraft, RenderHandle};
use radarscope_core::constants::*;
use radarscope_core::surface::DisplaySurface;

use crate::map::{MapDocument, MapLayer};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Dimensions and colors of the display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub width: f64,
    pub height: f64,
    pub aircraft_size: f64,
    pub label_offset_x: f64,
    pub font_size: f64,
    pub background: String,
    pub marker_fill: String,
    pub marker_stroke: String,
    pub label_fill: String,
    pub map_stroke: String,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            aircraft_size: AIRCRAFT_SIZE,
            label_offset_x: LABEL_OFFSET_X,
            font_size: LABEL_FONT_SIZE,
            background: "#222".into(),
            marker_fill: "white".into(),
            marker_stroke: "black".into(),
            label_fill: "white".into(),
            map_stroke: "#555".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AircraftGroup {
    id: String,
    x: f64,
    y: f64,
    heading: f64,
    callsign: String,
    data_block: String,
}

impl AircraftGroup {
    fn transform(&self) -> String {
        format!("translate({}, {}) rotate({})", self.x, self.y, self.heading)
    }
}

pub struct SvgSurface {
    style: SurfaceStyle,
    width: f64,
    height: f64,
    map_layers: Vec<MapLayer>,
    groups: Vec<AircraftGroup>,
}

impl SvgSurface {
    /// Surface drawn over the layers of `map`. Map dimensions, when given,
    /// take precedence over the style's.
    pub fn new(style: SurfaceStyle, map: &MapDocument) -> Self {
        Self {
            width: map.width.unwrap_or(style.width),
            height: map.height.unwrap_or(style.height),
            style,
            map_layers: map.layers.clone(),
            groups: Vec::new(),
        }
    }

    pub fn aircraft_count(&self) -> usize {
        self.groups.len()
    }

    /// Current `transform` attribute of a rendered aircraft group.
    pub fn transform_of(&self, handle: RenderHandle) -> Option<String> {
        self.groups.get(handle.index()).map(AircraftGroup::transform)
    }

    /// Serialize the whole display as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        let s = &self.style;
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" id="atc-map" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        let _ = writeln!(out, "  <style>{}</style>", escape(&self.style_sheet()));
        let _ = writeln!(
            out,
            r#"  <rect class="background" width="100%" height="100%" fill="{}"/>"#,
            escape(&s.background)
        );

        for layer in &self.map_layers {
            let _ = writeln!(out, r#"  <g id="{}" class="map-layer">"#, escape(&layer.id));
            for path in &layer.paths {
                let id_attr = path
                    .id
                    .as_deref()
                    .map(|id| format!(r#" id="{}""#, escape(id)))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    r#"    <path{id_attr} d="{}" fill="none" stroke="{}"/>"#,
                    escape(&path.d),
                    escape(&s.map_stroke)
                );
            }
            let _ = writeln!(out, "  </g>");
        }

        for group in &self.groups {
            self.write_group(&mut out, group);
        }

        out.push_str("</svg>\n");
        out
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_svg_string())
    }

    fn write_group(&self, out: &mut String, group: &AircraftGroup) {
        let s = &self.style;
        let half = s.aircraft_size / 2.0;
        let _ = writeln!(
            out,
            r#"  <g id="{}" class="aircraft" transform="{}">"#,
            escape(&group.id),
            group.transform()
        );
        let _ = writeln!(
            out,
            r#"    <rect x="{}" y="{}" width="{size}" height="{size}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            -half,
            -half,
            escape(&s.marker_fill),
            escape(&s.marker_stroke),
            size = s.aircraft_size,
        );
        let _ = writeln!(out, r#"    <g transform="translate({}, 0)">"#, s.label_offset_x);
        for (y, text) in [
            (CALLSIGN_LINE_Y, &group.callsign),
            (INFO_LINE_Y, &group.data_block),
        ] {
            let _ = writeln!(
                out,
                r#"      <text x="0" y="{y}" font-size="{}px" fill="{}">{}</text>"#,
                s.font_size,
                escape(&s.label_fill),
                escape(text)
            );
        }
        let _ = writeln!(out, "    </g>");
        let _ = writeln!(out, "  </g>");
    }

    fn style_sheet(&self) -> String {
        format!(
            "svg {{ background-color: {bg}; }} \
             .aircraft rect {{ fill: {fill}; stroke: {stroke}; }} \
             .aircraft text {{ fill: {label}; font-family: monospace; font-size: {font}px; }}",
            bg = self.style.background,
            fill = self.style.marker_fill,
            stroke = self.style.marker_stroke,
            label = self.style.label_fill,
            font = self.style.font_size,
        )
    }
}

impl DisplaySurface for SvgSurface {
    fn render(&mut self, aircraft: &Aircraft) -> RenderHandle {
        let [callsign, data_block] = aircraft.label_lines();
        self.groups.push(AircraftGroup {
            id: aircraft.id().to_string(),
            x: aircraft.x,
            y: aircraft.y,
            heading: aircraft.heading,
            callsign,
            data_block,
        });
        RenderHandle::new(self.groups.len() - 1)
    }

    fn clear(&mut self) {
        self.groups.clear();
    }

    fn refresh(&mut self, handle: RenderHandle, x: f64, y: f64, heading: f64) {
        match self.groups.get_mut(handle.index()) {
            Some(group) => {
                group.x = x;
                group.y = y;
                group.heading = heading;
            }
            None => log::debug!("Ignoring refresh of unknown render handle {handle:?}"),
        }
    }
}

/// Escape text for XML content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
