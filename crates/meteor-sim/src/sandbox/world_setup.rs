//! Entity spawn factories for the sandbox world.
//!
//! Creates stations with grid bounds and meteor entities with the
//! component bundle the movement and cleanup systems expect.

use glam::DVec2;
use hecs::World;

use meteor_core::constants::*;
use meteor_core::types::{BoundingBox, RegionId};

use super::components::*;

/// Spawn `count` stations on a row along the x-axis, centered on the origin.
pub fn setup_stations(world: &mut World, count: u32) -> Vec<hecs::Entity> {
    let (hx, hy) = STATION_HALF_EXTENTS;
    let offset = (count.saturating_sub(1)) as f64 * STATION_SPACING * 0.5;
    (0..count)
        .map(|i| {
            let center = DVec2::new(i as f64 * STATION_SPACING - offset, 0.0);
            spawn_station(
                world,
                &format!("Station {}", i + 1),
                RegionId(i),
                BoundingBox::new(center, DVec2::new(hx, hy)),
            )
        })
        .collect()
}

/// Spawn a single station whose largest grid covers `bounds`.
pub fn spawn_station(
    world: &mut World,
    name: &str,
    region: RegionId,
    bounds: BoundingBox,
) -> hecs::Entity {
    world.spawn((
        Station {
            name: name.to_owned(),
            region,
            impacts: 0,
        },
        GridBounds(bounds),
    ))
}

/// Spawn a meteor at rest. Motion comes from the scheduler's impulse.
pub fn spawn_meteor(world: &mut World, kind: &str, mass: f64, position: DVec2) -> hecs::Entity {
    world.spawn((
        Meteor {
            kind: kind.to_owned(),
        },
        Position(position),
        Velocity::default(),
        Mass(mass),
    ))
}

/// Prototype table from the built-in meteor kinds.
pub fn default_prototypes() -> Vec<(String, f64)> {
    METEOR_PROTOTYPES
        .iter()
        .map(|&(kind, mass)| (kind.to_owned(), mass))
        .collect()
}
