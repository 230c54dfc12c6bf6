//! Snapshot builder: reads the host world and running events into a
//! serialisable view.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use meteor_core::enums::WavePhase;
use meteor_core::events::WaveEvent;
use meteor_core::types::{EventId, SimTime};

use crate::random::RandomSource;
use crate::sandbox::components::{Meteor, Position, Station, Velocity};
use crate::sandbox::Sandbox;
use crate::scheduler::WaveScheduler;

/// Per-event progress as seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventView {
    pub id: EventId,
    pub phase: WavePhase,
    pub waves_remaining: i32,
    pub next_wave_at: f64,
    pub end_at: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteorView {
    pub entity: u32,
    pub kind: String,
    pub position: DVec2,
    pub velocity: DVec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationView {
    pub name: String,
    pub impacts: u32,
}

/// Everything that happened up to and during one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub time: SimTime,
    pub events: Vec<EventView>,
    pub meteors: Vec<MeteorView>,
    pub stations: Vec<StationView>,
    /// Progress events emitted during this tick.
    pub wave_events: Vec<WaveEvent>,
}

pub fn build_snapshot<R: RandomSource>(
    sandbox: &Sandbox,
    time: &SimTime,
    schedulers: &[WaveScheduler<R>],
    wave_events: Vec<WaveEvent>,
) -> EngineSnapshot {
    let world = sandbox.world();

    let events = schedulers
        .iter()
        .map(|s| {
            let state = s.state();
            EventView {
                id: s.event(),
                phase: s.phase(),
                waves_remaining: state.waves_remaining,
                next_wave_at: state.next_wave_deadline,
                end_at: state.end_deadline,
            }
        })
        .collect();

    let mut meteors: Vec<MeteorView> = world
        .query::<(&Meteor, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (meteor, pos, vel))| MeteorView {
            entity: entity.id(),
            kind: meteor.kind.clone(),
            position: pos.0,
            velocity: vel.0,
        })
        .collect();
    meteors.sort_by_key(|m| m.entity);

    let mut stations: Vec<(u32, StationView)> = world
        .query::<&Station>()
        .iter()
        .map(|(_, station)| {
            (
                station.region.0,
                StationView {
                    name: station.name.clone(),
                    impacts: station.impacts,
                },
            )
        })
        .collect();
    stations.sort_by_key(|(region, _)| *region);

    EngineSnapshot {
        time: *time,
        events,
        meteors,
        stations: stations.into_iter().map(|(_, view)| view).collect(),
        wave_events,
    }
}
