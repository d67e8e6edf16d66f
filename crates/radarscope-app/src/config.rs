use serde::Deserialize;
use thiserror::Error;

use radarscope_core::constants::{AIRFIELD_CENTER_X, AIRFIELD_CENTER_Y};
use radarscope_core::types::Position;
use radarscope_sim::{SettingsError, SpawnSettings};
use radarscope_svg::SurfaceStyle;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub seed: Option<u64>,
    pub airfield: AirfieldConfig,
    pub spawn: SpawnSettings,
    pub display: SurfaceStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AirfieldConfig {
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for AirfieldConfig {
    fn default() -> Self {
        Self {
            center_x: AIRFIELD_CENTER_X,
            center_y: AIRFIELD_CENTER_Y,
        }
    }
}

impl AirfieldConfig {
    pub fn position(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }
}

impl ApplicationConfig {
    pub fn construct_from_path(
        path: &std::path::Path,
    ) -> Result<ApplicationConfig, errors::ApplicationConfigError> {
        let string = std::fs::read_to_string(path).map_err(|error| {
            errors::ApplicationConfigError::Io {
                source: error,
                path: path.to_path_buf(),
            }
        })?;

        let config: ApplicationConfig =
            toml::from_str(&string).map_err(|error| errors::ApplicationConfigError::Parse {
                source: error,
                path: path.to_path_buf(),
            })?;

        config
            .spawn
            .validate()
            .map_err(|error| errors::ApplicationConfigError::Invalid {
                source: error,
                path: path.to_path_buf(),
            })?;
        Ok(config)
    }
}

pub mod errors {
    use super::*;

    #[derive(Debug, Error)]
    pub enum ApplicationConfigError {
        #[error("Failed to read config file '{}': {}", .path.display(), .source)]
        Io {
            source: std::io::Error,
            path: std::path::PathBuf,
        },
        #[error("Failed to parse config file '{}': {}", .path.display(), .source)]
        Parse {
            source: toml::de::Error,
            path: std::path::PathBuf,
        },
        #[error("Invalid config file '{}': {}", .path.display(), .source)]
        Invalid {
            source: SettingsError,
            path: std::path::PathBuf,
        },
    }
}
