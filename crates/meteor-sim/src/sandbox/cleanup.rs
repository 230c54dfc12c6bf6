//! Cleanup system: removes meteors that left the world.

use hecs::{Entity, World};

use meteor_core::constants::SANDBOX_WORLD_RADIUS;

use super::components::{Meteor, Position};

/// Remove meteors beyond the world boundary. Uses a caller-owned buffer to
/// avoid per-tick allocation. Returns how many were removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    let radius_sq = SANDBOX_WORLD_RADIUS * SANDBOX_WORLD_RADIUS;

    for (entity, (pos, _meteor)) in world.query_mut::<(&Position, &Meteor)>() {
        if pos.0.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
