//! Airfield map document.
//!
//! The map is a JSON document of named layers, each holding SVG path data.
//! Radials are read from the layer with id `radialsGroup`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use radarscope_core::constants::RADIALS_GROUP_ID;
use radarscope_core::radial::Radial;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Failed to read map file '{}': {}", .path.display(), .source)]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Failed to parse map file '{}': {}", .path.display(), .source)]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub layers: Vec<MapLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    pub id: String,
    #[serde(default)]
    pub paths: Vec<MapPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPath {
    #[serde(default)]
    pub id: Option<String>,
    pub d: String,
}

impl MapDocument {
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&text).map_err(|source| MapError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    pub fn layer(&self, id: &str) -> Option<&MapLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Radials from the `radialsGroup` layer. A missing layer or a path that
    /// cannot be read as a polyline is skipped with a warning.
    pub fn radials(&self) -> Vec<Radial> {
        let Some(layer) = self.layer(RADIALS_GROUP_ID) else {
            log::warn!("Map has no '{RADIALS_GROUP_ID}' layer; no radials loaded");
            return Vec::new();
        };

        let radials: Vec<Radial> = layer
            .paths
            .iter()
            .enumerate()
            .filter_map(|(i, path)| {
                let id = path
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("{}-{i}", layer.id));
                match Radial::from_path_data(id.as_str(), &path.d) {
                    Ok(radial) => Some(radial),
                    Err(e) => {
                        log::warn!("Skipping radial '{id}': {e}");
                        None
                    }
                }
            })
            .collect();

        log::info!(
            "Loaded {} of {} radial path(s) from '{RADIALS_GROUP_ID}'",
            radials.len(),
            layer.paths.len()
        );
        radials
    }
}
