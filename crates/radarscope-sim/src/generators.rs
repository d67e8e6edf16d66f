//! Randomized callsign, level and speed generators.

use rand::Rng;

use radarscope_core::constants::*;

/// Airline prefix plus a three-digit flight number, e.g. `KLM417`.
pub fn generate_callsign(rng: &mut impl Rng) -> String {
    let prefix = AIRLINE_PREFIXES[rng.gen_range(0..AIRLINE_PREFIXES.len())];
    let number = rng.gen_range(CALLSIGN_NUMBER_MIN..=CALLSIGN_NUMBER_MAX);
    format!("{prefix}{number}")
}

/// Level in tens of feet: one of 1000, 1010, ..., 1240.
pub fn random_level(rng: &mut impl Rng) -> u32 {
    (LEVEL_MIN / LEVEL_STEP + rng.gen_range(0..LEVEL_BANDS)) * LEVEL_STEP
}

/// Speed in tens of knots: 25..=39.
pub fn random_speed(rng: &mut impl Rng) -> u32 {
    rng.gen_range(SPEED_MIN..=SPEED_MAX)
}
