//! Wave scheduler: the state machine behind one meteor swarm event.
//!
//! The host calls [`WaveScheduler::activate`] once, then
//! [`WaveScheduler::on_tick`] every scheduling step until the outcome says
//! the event is finished. All time comes from the `now` argument and all
//! randomness from the injected [`RandomSource`].

use log::{debug, info, trace, warn};

use meteor_core::config::WaveEventConfig;
use meteor_core::enums::{TickOutcome, WavePhase};
use meteor_core::error::ConfigError;
use meteor_core::events::{Announcement, WaveEvent};
use meteor_core::types::EventId;

use crate::error::WaveError;
use crate::geometry::{plan_spawn, SpawnRing};
use crate::ports::{AnnouncementPort, EventHost};
use crate::random::{directional_bearing, pick, RandomSource};
use crate::state::WaveState;

/// Drives one event from activation to its single end announcement.
#[derive(Debug)]
pub struct WaveScheduler<R: RandomSource> {
    event: EventId,
    config: WaveEventConfig,
    state: WaveState,
    rng: R,
    events: Vec<WaveEvent>,
}

impl<R: RandomSource> WaveScheduler<R> {
    /// Validate the config, sample the wave budget and first deadline, and
    /// emit the start announcement. Fails without creating any state if the
    /// config is invalid or names a meteor type the host does not know.
    pub fn activate<H>(
        event: EventId,
        config: WaveEventConfig,
        now: f64,
        mut rng: R,
        host: &mut H,
    ) -> Result<Self, ConfigError>
    where
        H: EventHost + ?Sized,
    {
        config.validate()?;
        if let Some(unknown) = config.meteors.iter().find(|kind| !host.is_known_type(kind)) {
            return Err(ConfigError::UnknownSpawnType(unknown.clone()));
        }

        let waves = rng.range_i32(config.wave_count);
        let first_wave_at = now + rng.range_f64(config.wave_cooldown);
        let state = WaveState::new(waves, first_wave_at, directional_bearing(event));

        info!(
            "meteor swarm {:?} activated: {} waves, first at {:.1}s",
            event, waves, first_wave_at
        );

        let mut scheduler = Self {
            event,
            config,
            state,
            rng,
            events: vec![WaveEvent::Started {
                event,
                waves,
                first_wave_at,
            }],
        };

        if let Some(start) = scheduler.config.start() {
            scheduler.announce(host, &start);
        }

        Ok(scheduler)
    }

    /// Advance the event to `now`.
    ///
    /// Only spawn failures are returned as errors; missing targets, stale
    /// ticks and announcement failures are absorbed and logged. A wave cut
    /// short by a spawn failure still counts if any meteor made it out.
    pub fn on_tick<H>(&mut self, now: f64, host: &mut H) -> Result<TickOutcome, WaveError>
    where
        H: EventHost + ?Sized,
    {
        if self.state.terminated {
            trace!("tick for terminated event {:?} ignored", self.event);
            return Ok(TickOutcome::AlreadyTerminated);
        }

        if !host.is_event_active(self.event) || host.is_event_deleted(self.event) {
            trace!("tick for inactive event {:?} ignored", self.event);
            return Ok(TickOutcome::Continue);
        }

        if self.state.ending {
            return Ok(self.tick_ending(now, host));
        }

        if !self.state.wave_due(now) {
            return Ok(TickOutcome::Continue);
        }

        self.fire_wave(now, host)?;
        Ok(TickOutcome::Continue)
    }

    fn fire_wave<H>(&mut self, now: f64, host: &mut H) -> Result<(), WaveError>
    where
        H: EventHost + ?Sized,
    {
        // The deadline moves even if no target turns up, so a dry tick
        // drops this wave slot without touching the budget.
        let cooldown = self.rng.range_f64(self.config.wave_cooldown);
        self.state.defer_next_wave(cooldown);

        let regions = host.target_regions();
        let target = self
            .rng
            .pick_index(regions.len())
            .map(|i| regions[i])
            .and_then(|region| host.bounding_box(region).map(|bbox| (region, bbox)));
        let Some((region, bbox)) = target else {
            debug!(
                "meteor swarm {:?}: no target at {:.1}s, wave skipped",
                self.event, now
            );
            self.state.record_skip();
            self.events.push(WaveEvent::WaveSkipped {
                event: self.event,
                at: now,
            });
            return Ok(());
        };

        let count = self.rng.range_i32(self.config.meteors_per_wave).max(0) as u32;
        let ring = SpawnRing::around(&bbox);
        let policy = self.config.bearing_policy(self.state.bearing);

        let mut spawned = 0;
        let mut failure = None;
        for _ in 0..count {
            let Some(kind) = pick(&mut self.rng, &self.config.meteors) else {
                break;
            };
            let plan = plan_spawn(&ring, policy, &mut self.rng);

            match host.spawn(kind, plan.position) {
                Ok(handle) => {
                    let magnitude = self.config.meteor_speed * host.mass(handle);
                    host.apply_impulse(handle, plan.direction, magnitude);
                    spawned += 1;
                }
                Err(source) => {
                    failure = Some(source);
                    break;
                }
            }
        }

        // Nothing reached the world: the slot is lost but the budget is kept.
        if spawned == 0 {
            if let Some(source) = failure {
                return Err(WaveError::Spawn {
                    event: self.event,
                    source,
                });
            }
        }

        let end_at = self
            .state
            .complete_wave(spawned, now, self.config.end_delay_secs);
        debug!(
            "meteor swarm {:?}: {} of {} meteors at {:?}, {} waves left",
            self.event, spawned, count, region, self.state.waves_remaining
        );
        self.events.push(WaveEvent::WaveSpawned {
            event: self.event,
            region,
            meteors: spawned,
            waves_remaining: self.state.waves_remaining,
        });

        if let Some(end_at) = end_at {
            info!(
                "meteor swarm {:?}: last wave fired, ending at {:.1}s",
                self.event, end_at
            );
            self.events.push(WaveEvent::EndingStarted {
                event: self.event,
                end_at,
            });
        }

        match failure {
            Some(source) => Err(WaveError::Spawn {
                event: self.event,
                source,
            }),
            None => Ok(()),
        }
    }

    fn tick_ending<H>(&mut self, now: f64, host: &mut H) -> TickOutcome
    where
        H: EventHost + ?Sized,
    {
        if !self.state.end_due(now) {
            return TickOutcome::Continue;
        }

        if !self.state.terminate() {
            return TickOutcome::AlreadyTerminated;
        }

        if let Some(end) = self.config.end() {
            self.announce(host, &end);
        }

        info!("meteor swarm {:?} ended at {:.1}s", self.event, now);
        self.events.push(WaveEvent::Ended {
            event: self.event,
            at: now,
        });
        TickOutcome::Terminated
    }

    fn announce<H>(&self, host: &mut H, announcement: &Announcement)
    where
        H: AnnouncementPort + ?Sized,
    {
        if let Err(e) = host.announce(announcement) {
            warn!(
                "meteor swarm {:?}: announcement {:?} not delivered: {}",
                self.event, announcement.message, e
            );
        }
    }

    pub fn event(&self) -> EventId {
        self.event
    }

    pub fn config(&self) -> &WaveEventConfig {
        &self.config
    }

    pub fn state(&self) -> &WaveState {
        &self.state
    }

    pub fn phase(&self) -> WavePhase {
        self.state.phase()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.terminated
    }

    /// Take the progress events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<WaveEvent> {
        std::mem::take(&mut self.events)
    }
}
