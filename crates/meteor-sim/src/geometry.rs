//! Scatter placement for a wave of meteors.
//!
//! Pure functions: a bounding box and a random source in, spawn plans out.
//! Every plan starts outside the target's circumscribed circle and is aimed
//! back at the target center.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use meteor_core::constants::*;
use meteor_core::enums::BearingPolicy;
use meteor_core::events::SpawnPlan;
use meteor_core::types::BoundingBox;

use crate::random::RandomSource;

/// The annulus meteors spawn in, derived from a target's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRing {
    pub center: DVec2,
    /// No spawn is closer to the center than this.
    pub min_distance: f64,
    pub max_distance: f64,
    /// Upper bound on the sideways offset from the bearing ray.
    pub max_lateral: f64,
}

impl SpawnRing {
    pub fn around(bbox: &BoundingBox) -> Self {
        let radius = bbox.radius();
        let min_distance = radius + SPAWN_MARGIN;
        Self {
            center: bbox.center,
            min_distance,
            max_distance: min_distance + SPAWN_SPREAD_BAND,
            max_lateral: radius / LATERAL_SPREAD_DIVISOR,
        }
    }
}

/// Plan one meteor. Draws, in order: angle (scatter policy only), radial
/// fraction, lateral side, lateral fraction.
pub fn plan_spawn<R>(ring: &SpawnRing, policy: BearingPolicy, rng: &mut R) -> SpawnPlan
where
    R: RandomSource + ?Sized,
{
    let angle = match policy {
        BearingPolicy::Scatter => rng.next_angle(),
        BearingPolicy::Fixed(bearing) => bearing,
    };

    let distance = (ring.max_distance - ring.min_distance) * rng.next_f64() + ring.min_distance;
    let offset = DVec2::from_angle(angle) * distance;

    // Spawns line up perpendicular to the bearing so a wave does not
    // converge on a single point.
    let lateral_angle = if rng.prob(LATERAL_LEFT_PROBABILITY) {
        angle + FRAC_PI_2
    } else {
        angle - FRAC_PI_2
    };
    let lateral = DVec2::from_angle(lateral_angle) * (ring.max_lateral * rng.next_f64());

    SpawnPlan {
        position: ring.center + offset + lateral,
        direction: -offset.normalize_or_zero(),
    }
}

/// Plan `count` meteors around one target.
pub fn plan_wave<R>(
    bbox: &BoundingBox,
    count: usize,
    policy: BearingPolicy,
    rng: &mut R,
) -> Vec<SpawnPlan>
where
    R: RandomSource + ?Sized,
{
    let ring = SpawnRing::around(bbox);
    (0..count).map(|_| plan_spawn(&ring, policy, rng)).collect()
}
