//! Mutable progress of one event.

use serde::{Deserialize, Serialize};

use meteor_core::enums::WavePhase;

/// Counters kept alongside the state for telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveStats {
    pub waves_fired: u32,
    pub waves_skipped: u32,
    pub meteors_spawned: u32,
}

/// Progress record owned by exactly one scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Waves left to fire. Only ever decreases.
    pub waves_remaining: i32,
    /// A wave fires on the first tick at or after this time.
    pub next_wave_deadline: f64,
    /// Set once, right after the last wave.
    pub ending: bool,
    /// Present only while ending.
    pub end_deadline: Option<f64>,
    /// Set once, when the end announcement fires.
    pub terminated: bool,
    /// Bearing used by directional events.
    pub bearing: f64,
    pub stats: WaveStats,
}

impl WaveState {
    pub fn new(waves: i32, first_wave_at: f64, bearing: f64) -> Self {
        Self {
            waves_remaining: waves,
            next_wave_deadline: first_wave_at,
            ending: false,
            end_deadline: None,
            terminated: false,
            bearing,
            stats: WaveStats::default(),
        }
    }

    pub fn phase(&self) -> WavePhase {
        if self.terminated {
            WavePhase::Terminated
        } else if self.ending {
            WavePhase::Ending
        } else {
            WavePhase::Active
        }
    }

    pub fn wave_due(&self, now: f64) -> bool {
        now >= self.next_wave_deadline
    }

    /// False outside the ending countdown.
    pub fn end_due(&self, now: f64) -> bool {
        self.ending && self.end_deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Push the next-wave deadline forward by one cooldown.
    pub fn defer_next_wave(&mut self, cooldown: f64) {
        self.next_wave_deadline += cooldown;
    }

    pub fn record_skip(&mut self) {
        self.stats.waves_skipped += 1;
    }

    /// Account for one fired wave. Returns the end deadline if this wave
    /// exhausted the budget and started the countdown.
    pub fn complete_wave(&mut self, meteors: u32, now: f64, end_delay: f64) -> Option<f64> {
        if self.ending {
            return None;
        }

        self.stats.waves_fired += 1;
        self.stats.meteors_spawned += meteors;
        self.waves_remaining -= 1;

        if self.waves_remaining > 0 {
            return None;
        }

        let end_at = now + end_delay;
        self.ending = true;
        self.end_deadline = Some(end_at);
        Some(end_at)
    }

    /// Mark the event finished. Returns false if it already was.
    pub fn terminate(&mut self) -> bool {
        if self.terminated || !self.ending {
            return false;
        }
        self.terminated = true;
        true
    }
}
