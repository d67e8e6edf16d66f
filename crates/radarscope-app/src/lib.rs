//! RADARSCOPE application.
//!
//! Wires the configuration, the map document, the SVG surface and the
//! traffic scope together, then runs the first spawn and (optionally) the
//! interactive console.

pub mod cli;
pub mod config;
pub mod logging;
pub mod outputs;
pub mod session;

use std::path::PathBuf;

use thiserror::Error;

use radarscope_sim::{ScopeConfig, ScopeError, TrafficScope};
use radarscope_svg::{MapDocument, MapError, SvgSurface};

use crate::cli::Cli;
use crate::config::errors::ApplicationConfigError;
use crate::config::ApplicationConfig;
use crate::outputs::OutputPaths;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ApplicationConfigError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error("Failed to write '{}': {}", .path.display(), .source)]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("Console I/O failed: {0}")]
    Console(std::io::Error),
}

/// Build the scope described by the command line and config file.
pub fn bootstrap(cli: &Cli) -> Result<TrafficScope<SvgSurface>, AppError> {
    let config = match &cli.config_file {
        Some(path) => ApplicationConfig::construct_from_path(path)?,
        None => ApplicationConfig::default(),
    };

    let map = match &cli.map {
        Some(path) => MapDocument::load(path)?,
        None => {
            log::warn!("No map document given; the display has no static layers");
            MapDocument::default()
        }
    };
    let radials = map.radials();

    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    log::info!("Using seed {seed}");

    let surface = SvgSurface::new(config.display.clone(), &map);
    Ok(TrafficScope::new(
        ScopeConfig {
            seed,
            airfield: config.airfield.position(),
            spawn: config.spawn,
        },
        radials,
        surface,
    ))
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut scope = bootstrap(&cli)?;
    let outputs = OutputPaths {
        svg: cli.output.clone(),
        snapshot: cli.snapshot.clone(),
    };

    let count = match &cli.count {
        Some(text) => scope.settings().parse_count(text),
        None => scope.settings().default_count,
    };
    scope.spawn(count)?;
    outputs.write(&scope)?;
    log::info!("Display written to {}", outputs.svg.display());

    if cli.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        session::run_session(&mut scope, stdin.lock(), stdout.lock(), &outputs)?;
    }
    Ok(())
}
