//! Simulation engine: a caller-owned scheduling loop.
//!
//! `SimulationEngine` owns the sandbox host and every running wave
//! scheduler, advances time at a fixed tick rate, retires finished events
//! and produces `EngineSnapshot`s. Completely headless, enabling
//! deterministic testing.

use log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use meteor_core::config::WaveEventConfig;
use meteor_core::constants::TICK_RATE;
use meteor_core::error::ConfigError;
use meteor_core::events::WaveEvent;
use meteor_core::types::{EventId, SimTime};

use crate::error::WaveError;
use crate::random::ChaChaSource;
use crate::sandbox::Sandbox;
use crate::scheduler::WaveScheduler;
use crate::snapshot::{self, EngineSnapshot};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per simulated second.
    pub tick_rate: u32,
    /// Stations placed in the default layout.
    pub stations: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            stations: 1,
        }
    }
}

/// The simulation engine. Owns the host world and all running events.
pub struct SimulationEngine {
    sandbox: Sandbox,
    time: SimTime,
    dt: f64,
    rng: ChaCha8Rng,
    next_event_id: u64,
    schedulers: Vec<WaveScheduler<ChaChaSource>>,
    pending_events: Vec<WaveEvent>,
}

impl SimulationEngine {
    /// Create an engine with the default station layout.
    pub fn new(config: SimConfig) -> Self {
        let sandbox = Sandbox::with_stations(config.stations);
        Self::with_sandbox(config, sandbox)
    }

    /// Create an engine around a prepared host world.
    pub fn with_sandbox(config: SimConfig, sandbox: Sandbox) -> Self {
        Self {
            sandbox,
            time: SimTime::default(),
            dt: 1.0 / config.tick_rate.max(1) as f64,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_event_id: 0,
            schedulers: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Activate a new meteor swarm at the current time. Each event gets its
    /// own random stream, split off the engine seed.
    pub fn start_event(&mut self, config: WaveEventConfig) -> Result<EventId, ConfigError> {
        let event = EventId(self.next_event_id);
        let rng = ChaChaSource::seed_from_u64(self.rng.gen());

        self.sandbox.register_event(event);
        let mut scheduler = match WaveScheduler::activate(
            event,
            config,
            self.time.elapsed_secs,
            rng,
            &mut self.sandbox,
        ) {
            Ok(scheduler) => scheduler,
            Err(e) => {
                self.sandbox.retire_event(event);
                return Err(e);
            }
        };

        self.next_event_id += 1;
        self.pending_events.extend(scheduler.drain_events());
        self.schedulers.push(scheduler);
        Ok(event)
    }

    /// Stop an event early. Its scheduler is dropped without an end
    /// announcement.
    pub fn cancel_event(&mut self, event: EventId) -> bool {
        let before = self.schedulers.len();
        self.sandbox.deactivate_event(event);
        self.schedulers.retain(|s| s.event() != event);
        self.sandbox.retire_event(event);
        self.schedulers.len() != before
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// A failing scheduler does not stop the others: the tick runs to the
    /// end, its progress events carry over to the next snapshot, and the
    /// first error is returned.
    pub fn tick(&mut self) -> Result<EngineSnapshot, WaveError> {
        self.time.advance(self.dt);
        let now = self.time.elapsed_secs;

        let mut events = std::mem::take(&mut self.pending_events);
        let mut finished = Vec::new();
        let mut failure = None;
        for scheduler in &mut self.schedulers {
            match scheduler.on_tick(now, &mut self.sandbox) {
                Ok(outcome) if outcome.is_finished() => finished.push(scheduler.event()),
                Ok(_) => {}
                Err(e) => {
                    warn!("tick {}: {}", self.time.tick, e);
                    failure.get_or_insert(e);
                }
            }
            events.extend(scheduler.drain_events());
        }

        if !finished.is_empty() {
            self.schedulers.retain(|s| !finished.contains(&s.event()));
            for event in finished {
                self.sandbox.retire_event(event);
            }
        }

        self.sandbox.step(self.dt);

        if let Some(e) = failure {
            self.pending_events = events;
            return Err(e);
        }

        Ok(snapshot::build_snapshot(
            &self.sandbox,
            &self.time,
            &self.schedulers,
            events,
        ))
    }

    /// Tick until no event is running or `max_secs` of simulated time pass.
    /// Returns every snapshot produced.
    pub fn run_until_idle(&mut self, max_secs: f64) -> Result<Vec<EngineSnapshot>, WaveError> {
        let mut snapshots = Vec::new();
        while !self.schedulers.is_empty() && self.time.elapsed_secs < max_secs {
            snapshots.push(self.tick()?);
        }
        Ok(snapshots)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of events still running.
    pub fn active_events(&self) -> usize {
        self.schedulers.len()
    }

    pub fn scheduler(&self, event: EventId) -> Option<&WaveScheduler<ChaChaSource>> {
        self.schedulers.iter().find(|s| s.event() == event)
    }

    /// Get a read-only reference to the host world.
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    pub fn sandbox_mut(&mut self) -> &mut Sandbox {
        &mut self.sandbox
    }
}
