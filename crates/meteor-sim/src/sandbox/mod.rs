//! Headless host world for running meteor swarm events.
//!
//! `Sandbox` owns a hecs world of stations and meteors, implements the
//! scheduler's host ports, and records every outbound call so runs can be
//! compared call-for-call.

pub mod cleanup;
pub mod components;
pub mod movement;
pub mod world_setup;

use std::collections::BTreeMap;

use glam::DVec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use meteor_core::error::{DeliveryError, SpawnError};
use meteor_core::events::Announcement;
use meteor_core::types::{BoundingBox, EventId, RegionId};

use crate::ports::{AnnouncementPort, EventHost, SpawnEffector};
use components::{GridBounds, Mass, Meteor, Station, Velocity};

/// One outbound call made by a scheduler into the sandbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call")]
pub enum HostCall {
    Spawn {
        kind: String,
        position: DVec2,
        entity: u32,
    },
    Impulse {
        entity: u32,
        direction: DVec2,
        magnitude: f64,
    },
    Announce {
        announcement: Announcement,
    },
}

/// Host-side status of a registered event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct EventStatus {
    active: bool,
    deleted: bool,
}

/// In-memory host implementing [`EventHost`].
pub struct Sandbox {
    world: World,
    prototypes: BTreeMap<String, f64>,
    events: BTreeMap<EventId, EventStatus>,
    calls: Vec<HostCall>,
    despawn_buffer: Vec<Entity>,
    next_region: u32,
    announcements_fail: bool,
    spawn_budget: Option<u32>,
    impacts: u32,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(world_setup::default_prototypes())
    }
}

impl Sandbox {
    /// Empty world knowing the given `(kind, mass)` prototypes.
    pub fn new(prototypes: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            world: World::new(),
            prototypes: prototypes.into_iter().collect(),
            events: BTreeMap::new(),
            calls: Vec::new(),
            despawn_buffer: Vec::new(),
            next_region: 0,
            announcements_fail: false,
            spawn_budget: None,
            impacts: 0,
        }
    }

    /// Default prototypes and `count` stations in a row.
    pub fn with_stations(count: u32) -> Self {
        let mut sandbox = Self::default();
        let stations = world_setup::setup_stations(&mut sandbox.world, count);
        sandbox.next_region = stations.len() as u32;
        sandbox
    }

    /// Add a station whose grid covers `bounds`.
    pub fn add_station(&mut self, name: &str, bounds: BoundingBox) -> RegionId {
        let region = RegionId(self.next_region);
        self.next_region += 1;
        world_setup::spawn_station(&mut self.world, name, region, bounds);
        region
    }

    /// Remove a station. Returns false if no station had that region.
    pub fn remove_station(&mut self, region: RegionId) -> bool {
        match self.station_entity(region) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Register an event as active.
    pub fn register_event(&mut self, event: EventId) {
        self.events.insert(
            event,
            EventStatus {
                active: true,
                deleted: false,
            },
        );
    }

    /// The rule was switched off externally.
    pub fn deactivate_event(&mut self, event: EventId) {
        if let Some(status) = self.events.get_mut(&event) {
            status.active = false;
        }
    }

    /// The entity owning the event was removed.
    pub fn delete_event(&mut self, event: EventId) {
        if let Some(status) = self.events.get_mut(&event) {
            status.deleted = true;
        }
    }

    /// Forget an event after it finished.
    pub fn retire_event(&mut self, event: EventId) {
        self.events.remove(&event);
    }

    /// Make every subsequent announcement fail delivery.
    pub fn set_announcements_failing(&mut self, failing: bool) {
        self.announcements_fail = failing;
    }

    /// Accept only `budget` more spawns, then refuse every one. `None`
    /// lifts the limit.
    pub fn set_spawn_budget(&mut self, budget: Option<u32>) {
        self.spawn_budget = budget;
    }

    /// Integrate meteor motion, resolve station impacts and drop meteors
    /// that left the world.
    pub fn step(&mut self, dt: f64) {
        movement::run(&mut self.world, dt);
        self.impacts += movement::resolve_impacts(&mut self.world, &mut self.despawn_buffer);
        cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn meteor_count(&self) -> usize {
        self.world.query::<&Meteor>().iter().count()
    }

    /// Total meteors that have hit any station.
    pub fn impacts(&self) -> u32 {
        self.impacts
    }

    fn station_entity(&self, region: RegionId) -> Option<Entity> {
        self.world
            .query::<&Station>()
            .iter()
            .find(|(_, station)| station.region == region)
            .map(|(entity, _)| entity)
    }
}

impl SpawnEffector for Sandbox {
    type Handle = Entity;

    fn is_known_type(&self, kind: &str) -> bool {
        self.prototypes.contains_key(kind)
    }

    fn spawn(&mut self, kind: &str, position: DVec2) -> Result<Entity, SpawnError> {
        let mass = *self
            .prototypes
            .get(kind)
            .ok_or_else(|| SpawnError::UnknownType(kind.to_owned()))?;
        if let Some(budget) = self.spawn_budget.as_mut() {
            if *budget == 0 {
                return Err(SpawnError::Rejected {
                    kind: kind.to_owned(),
                    reason: "spawn budget exhausted".into(),
                });
            }
            *budget -= 1;
        }
        let entity = world_setup::spawn_meteor(&mut self.world, kind, mass, position);
        self.calls.push(HostCall::Spawn {
            kind: kind.to_owned(),
            position,
            entity: entity.id(),
        });
        Ok(entity)
    }

    fn mass(&self, handle: Entity) -> f64 {
        self.world.get::<&Mass>(handle).map(|m| m.0).unwrap_or(0.0)
    }

    fn apply_impulse(&mut self, handle: Entity, direction: DVec2, magnitude: f64) {
        self.calls.push(HostCall::Impulse {
            entity: handle.id(),
            direction,
            magnitude,
        });
        if let Ok((mass, vel)) = self.world.query_one_mut::<(&Mass, &mut Velocity)>(handle) {
            if mass.0 > 0.0 {
                vel.0 += direction * magnitude / mass.0;
            }
        }
    }

    fn target_regions(&self) -> Vec<RegionId> {
        let mut regions: Vec<RegionId> = self
            .world
            .query::<(&Station, &GridBounds)>()
            .iter()
            .map(|(_, (station, _))| station.region)
            .collect();
        regions.sort();
        regions
    }

    fn bounding_box(&self, region: RegionId) -> Option<BoundingBox> {
        let entity = self.station_entity(region)?;
        self.world.get::<&GridBounds>(entity).ok().map(|grid| grid.0)
    }
}

impl AnnouncementPort for Sandbox {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), DeliveryError> {
        if self.announcements_fail {
            return Err(DeliveryError::Failed("announcement channel down".into()));
        }
        self.calls.push(HostCall::Announce {
            announcement: announcement.clone(),
        });
        Ok(())
    }
}

impl EventHost for Sandbox {
    fn is_event_active(&self, event: EventId) -> bool {
        self.events.get(&event).is_some_and(|status| status.active)
    }

    fn is_event_deleted(&self, event: EventId) -> bool {
        self.events.get(&event).map_or(true, |status| status.deleted)
    }
}

