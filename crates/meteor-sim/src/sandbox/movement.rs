//! Kinematic integration and impact resolution for meteors.

use hecs::{Entity, World};

use super::components::{GridBounds, Meteor, Position, Station, Velocity};

/// Integrate every meteor: position += velocity * dt.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}

/// Despawn meteors that entered a station's grid and count the hit on that
/// station. Returns the number of impacts this call.
pub fn resolve_impacts(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    let grids: Vec<(Entity, GridBounds)> = world
        .query_mut::<&GridBounds>()
        .into_iter()
        .map(|(entity, bounds)| (entity, *bounds))
        .collect();

    let mut hits: Vec<Entity> = Vec::new();
    for (entity, (pos, _meteor)) in world.query_mut::<(&Position, &Meteor)>() {
        if let Some((station, _)) = grids.iter().find(|(_, grid)| grid.0.contains(pos.0)) {
            despawn_buffer.push(entity);
            hits.push(*station);
        }
    }

    for station in &hits {
        if let Ok(mut s) = world.get::<&mut Station>(*station) {
            s.impacts += 1;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    hits.len() as u32
}
