//! Traffic scope: the single owner of the active aircraft collection.
//!
//! `TrafficScope` owns the display surface, the seeded RNG, the loaded
//! radials and the id counter. A spawn pass clears the surface and
//! rebuilds the whole collection inside one `&mut self` call.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use radarscope_core::aircraft::{Aircraft, AircraftId, EntityError};
use radarscope_core::commands::DisplayCommand;
use radarscope_core::constants::{AIRFIELD_CENTER_X, AIRFIELD_CENTER_Y};
use radarscope_core::radial::Radial;
use radarscope_core::state::{AircraftView, ScopeSnapshot};
use radarscope_core::surface::DisplaySurface;
use radarscope_core::types::Position;

use crate::generators;
use crate::placement;
use crate::settings::SpawnSettings;

/// Configuration for a new scope.
#[derive(Debug, Clone)]
pub struct ScopeConfig {
    /// RNG seed. Same seed = same traffic.
    pub seed: u64,
    pub airfield: Position,
    pub spawn: SpawnSettings,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            airfield: Position::new(AIRFIELD_CENTER_X, AIRFIELD_CENTER_Y),
            spawn: SpawnSettings::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("no active aircraft with id {0}")]
    UnknownAircraft(AircraftId),
    #[error(transparent)]
    Entity(#[from] EntityError),
}

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

pub struct TrafficScope<S> {
    surface: S,
    rng: ChaCha8Rng,
    airfield: Position,
    settings: SpawnSettings,
    radials: Vec<Radial>,
    aircraft: Vec<Aircraft>,
    next_id: u64,
    spawn_pass: u64,
}

impl<S: DisplaySurface> TrafficScope<S> {
    pub fn new(config: ScopeConfig, radials: Vec<Radial>, surface: S) -> Self {
        Self {
            surface,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            airfield: config.airfield,
            settings: config.spawn,
            radials,
            aircraft: Vec::new(),
            next_id: 0,
            spawn_pass: 0,
        }
    }

    /// Replace the active traffic with `count` freshly placed aircraft.
    pub fn spawn(&mut self, count: u32) -> Result<&[Aircraft], ScopeError> {
        self.surface.clear();
        self.aircraft.clear();
        self.spawn_pass += 1;

        if self.radials.is_empty() {
            log::warn!(
                "No radial paths loaded; aircraft will spawn on the {} unit ring",
                self.settings.distance
            );
        }

        self.aircraft.reserve(count as usize);
        for _ in 0..count {
            let placement =
                placement::place(&mut self.rng, &self.settings, self.airfield, &self.radials);
            let callsign = generators::generate_callsign(&mut self.rng);
            let level = generators::random_level(&mut self.rng);
            let speed = generators::random_speed(&mut self.rng);

            let id = self.allocate_id();
            let mut aircraft = Aircraft::new(
                id,
                callsign,
                placement.position.x,
                placement.position.y,
                level,
                speed,
                placement.heading,
            )
            .with_origin(placement.origin);

            let handle = self.surface.render(&aircraft);
            aircraft.attach_render_handle(handle)?;

            log::debug!(
                "Spawned {} {} at ({:.1}, {:.1}) heading {:.1} via {:?}",
                id,
                aircraft.callsign(),
                aircraft.x,
                aircraft.y,
                aircraft.heading,
                aircraft.origin()
            );
            self.aircraft.push(aircraft);
        }

        let on_radials = self
            .aircraft
            .iter()
            .filter(|a| a.origin().is_radial())
            .count();
        log::info!(
            "Spawn pass {}: {} aircraft ({} on radials, {} on ring)",
            self.spawn_pass,
            self.aircraft.len(),
            on_radials,
            self.aircraft.len() - on_radials
        );

        Ok(&self.aircraft)
    }

    /// Move an aircraft and refresh its marker on the surface.
    pub fn update_position(&mut self, id: AircraftId, x: f64, y: f64) -> Result<(), ScopeError> {
        let aircraft = self
            .aircraft
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(ScopeError::UnknownAircraft(id))?;

        aircraft.update_position(x, y);
        if let Some(handle) = aircraft.render_handle() {
            self.surface.refresh(handle, aircraft.x, aircraft.y, aircraft.heading);
        }
        Ok(())
    }

    /// Apply one operator command.
    pub fn apply(&mut self, command: DisplayCommand) -> Result<CommandOutcome, ScopeError> {
        match command {
            DisplayCommand::Respawn { count } => {
                self.spawn(count)?;
            }
            DisplayCommand::MoveAircraft { id, x, y } => {
                self.update_position(id, x, y)?;
            }
            DisplayCommand::Quit => return Ok(CommandOutcome::Quit),
        }
        Ok(CommandOutcome::Continue)
    }

    pub fn snapshot(&self) -> ScopeSnapshot {
        ScopeSnapshot {
            spawn_pass: self.spawn_pass,
            airfield: self.airfield,
            radial_count: self.radials.len(),
            aircraft: self.aircraft.iter().map(AircraftView::from).collect(),
        }
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn find(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id() == id)
    }

    pub fn radials(&self) -> &[Radial] {
        &self.radials
    }

    pub fn settings(&self) -> &SpawnSettings {
        &self.settings
    }

    pub fn spawn_pass(&self) -> u64 {
        self.spawn_pass
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn allocate_id(&mut self) -> AircraftId {
        let id = AircraftId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
