//! Display constants and spawn tuning parameters.

// --- Airfield ---

/// Airfield center, x coordinate in display units.
pub const AIRFIELD_CENTER_X: f64 = 500.0;

/// Airfield center, y coordinate in display units (y grows downward).
pub const AIRFIELD_CENTER_Y: f64 = 300.0;

// --- Spawning ---

/// Ring radius around the airfield center for non-radial spawns.
pub const SPAWN_DISTANCE: f64 = 400.0;

/// Probability that an aircraft spawns on a radial (when any exist).
pub const RADIAL_SPAWN_PROBABILITY: f64 = 0.7;

/// Radial spawns keep at least this fraction of `SPAWN_DISTANCE` from the
/// airfield center.
pub const RADIAL_MIN_RANGE_FRACTION: f64 = 0.5;

/// Arc-length draws tried before falling back to the far end of a radial.
pub const RADIAL_SAMPLE_ATTEMPTS: usize = 16;

/// Probability that the initial heading is perturbed.
pub const HEADING_DEVIATION_PROBABILITY: f64 = 0.3;

/// Maximum heading perturbation in either direction (degrees).
pub const MAX_HEADING_DEVIATION_DEG: f64 = 30.0;

/// Count used when the respawn control holds no usable value.
pub const DEFAULT_SPAWN_COUNT: u32 = 10;

/// Smallest accepted respawn count.
pub const MIN_SPAWN_COUNT: u32 = 1;

/// Largest accepted respawn count.
pub const MAX_SPAWN_COUNT: u32 = 50;

// --- Generated attributes ---

/// Airline prefixes used for generated callsigns.
pub const AIRLINE_PREFIXES: [&str; 9] = [
    "UAL", "AAL", "DAL", "SWA", "EZY", "RYR", "BAW", "KLM", "AFR",
];

/// Callsign flight number range (inclusive).
pub const CALLSIGN_NUMBER_MIN: u32 = 100;
pub const CALLSIGN_NUMBER_MAX: u32 = 999;

/// Lowest generated level, in tens of feet (FL100).
pub const LEVEL_MIN: u32 = 1000;

/// Number of distinct level bands above `LEVEL_MIN`.
pub const LEVEL_BANDS: u32 = 25;

/// Level band spacing, in tens of feet.
pub const LEVEL_STEP: u32 = 10;

/// Speed band range in tens of knots (inclusive).
pub const SPEED_MIN: u32 = 25;
pub const SPEED_MAX: u32 = 39;

// --- Display ---

/// Default display width in display units.
pub const DISPLAY_WIDTH: f64 = 1000.0;

/// Default display height in display units.
pub const DISPLAY_HEIGHT: f64 = 600.0;

/// Side length of the square aircraft marker.
pub const AIRCRAFT_SIZE: f64 = 10.0;

/// Horizontal offset of the label block from the marker.
pub const LABEL_OFFSET_X: f64 = 15.0;

/// Label font size in display units.
pub const LABEL_FONT_SIZE: f64 = 10.0;

/// Vertical position of the callsign line within the label block.
pub const CALLSIGN_LINE_Y: f64 = -5.0;

/// Vertical position of the level/speed line within the label block.
pub const INFO_LINE_Y: f64 = 5.0;

// --- Map ---

/// Identifier of the map layer holding the radial paths.
pub const RADIALS_GROUP_ID: &str = "radialsGroup";
