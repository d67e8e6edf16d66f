//! Files written after every render.

use std::path::PathBuf;

use radarscope_sim::TrafficScope;
use radarscope_svg::SvgSurface;

use crate::AppError;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub svg: PathBuf,
    pub snapshot: Option<PathBuf>,
}

impl OutputPaths {
    pub fn write(&self, scope: &TrafficScope<SvgSurface>) -> Result<(), AppError> {
        scope
            .surface()
            .write_to(&self.svg)
            .map_err(|source| AppError::Write {
                source,
                path: self.svg.clone(),
            })?;
        log::debug!("Wrote display to {}", self.svg.display());

        if let Some(path) = &self.snapshot {
            let json = serde_json::to_string_pretty(&scope.snapshot())?;
            std::fs::write(path, json).map_err(|source| AppError::Write {
                source,
                path: path.clone(),
            })?;
            log::debug!("Wrote snapshot to {}", path.display());
        }
        Ok(())
    }
}
