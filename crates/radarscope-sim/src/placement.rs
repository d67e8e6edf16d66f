//! Placement algorithm: where a new aircraft appears and where it points.
//!
//! With radials loaded, an aircraft lands on a randomly chosen radial at a
//! random arc length, away from the airfield itself. Otherwise it sits on
//! the spawn ring at a random angle.
//! Either way it initially points at the airfield, sometimes with a random
//! deviation.

use rand::Rng;

use radarscope_core::constants::RADIAL_SAMPLE_ATTEMPTS;
use radarscope_core::enums::SpawnOrigin;
use radarscope_core::geometry::point_on_ring;
use radarscope_core::radial::Radial;
use radarscope_core::types::Position;

use crate::settings::SpawnSettings;

/// Spawn point and initial heading for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub heading: f64,
    pub origin: SpawnOrigin,
}

/// Place one aircraft.
pub fn place(
    rng: &mut impl Rng,
    settings: &SpawnSettings,
    airfield: Position,
    radials: &[Radial],
) -> Placement {
    let (position, origin) =
        if !radials.is_empty() && rng.gen::<f64>() < settings.radial_probability {
            let radial_index = rng.gen_range(0..radials.len());
            let position = sample_on_radial(
                rng,
                &radials[radial_index],
                settings.radial_min_fraction,
                airfield,
                settings.radial_min_range(),
            );
            (position, SpawnOrigin::Radial { radial_index })
        } else {
            (sample_on_ring(rng, airfield, settings.distance), SpawnOrigin::Ring)
        };

    let mut heading = position.heading_to(&airfield);
    if rng.gen::<f64>() < settings.deviation_probability {
        heading += rng.gen::<f64>() * 2.0 * settings.max_deviation_deg - settings.max_deviation_deg;
    }

    Placement {
        position,
        heading,
        origin,
    }
}

/// Uniform point by arc length on `[min_fraction, 1] * length` of the radial,
/// redrawn until it lies at least `min_range` from `airfield`.
///
/// After `RADIAL_SAMPLE_ATTEMPTS` misses the farthest point seen is used,
/// with both ends of the sampled interval as candidates.
pub fn sample_on_radial(
    rng: &mut impl Rng,
    radial: &Radial,
    min_fraction: f64,
    airfield: Position,
    min_range: f64,
) -> Position {
    let length = radial.length();
    let start = min_fraction.clamp(0.0, 1.0) * length;

    let mut farthest: Option<(f64, Position)> = None;
    for _ in 0..RADIAL_SAMPLE_ATTEMPTS {
        let distance = start + rng.gen::<f64>() * (length - start);
        let candidate: Position = radial.point_at_length(distance).into();
        let range = candidate.range_to(&airfield);
        if range >= min_range {
            return candidate;
        }
        if farthest.map_or(true, |(best, _)| range > best) {
            farthest = Some((range, candidate));
        }
    }

    [start, length]
        .into_iter()
        .map(|d| Position::from(radial.point_at_length(d)))
        .chain(farthest.map(|(_, p)| p))
        .max_by(|a, b| a.range_to(&airfield).total_cmp(&b.range_to(&airfield)))
        .unwrap_or_else(|| radial.start().into())
}

/// Uniform angle on the ring of radius `distance` around `center`.
pub fn sample_on_ring(rng: &mut impl Rng, center: Position, distance: f64) -> Position {
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    point_on_ring(center, distance, angle)
}
