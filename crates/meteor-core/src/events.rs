//! Announcements and progress events emitted by the scheduler.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::AudienceScope;
use crate::types::{EventId, RegionId};

/// A start or end notification handed to the announcement port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Localization id of the text, if any.
    pub message: Option<String>,
    /// Sound cue id, if any.
    pub sound: Option<String>,
    pub scope: AudienceScope,
}

impl Announcement {
    /// Build an announcement, or `None` when there is nothing to say or play.
    pub fn from_parts(message: Option<&str>, sound: Option<&str>) -> Option<Self> {
        if message.is_none() && sound.is_none() {
            return None;
        }
        Some(Self {
            message: message.map(str::to_owned),
            sound: sound.map(str::to_owned),
            scope: AudienceScope::default(),
        })
    }
}

/// Progress events for telemetry, drained by the host after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WaveEvent {
    /// Event activated with the sampled wave budget.
    Started {
        event: EventId,
        waves: i32,
        first_wave_at: f64,
    },
    /// One wave spawned around a region.
    WaveSpawned {
        event: EventId,
        region: RegionId,
        meteors: u32,
        waves_remaining: i32,
    },
    /// A due wave found no target and was dropped without consuming budget.
    WaveSkipped { event: EventId, at: f64 },
    /// Last wave fired; the end countdown began.
    EndingStarted { event: EventId, end_at: f64 },
    /// End announcement emitted.
    Ended { event: EventId, at: f64 },
}

/// Where one meteor was placed and where it was sent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlan {
    pub position: DVec2,
    /// Unit vector from the spawn point back toward the target center.
    pub direction: DVec2,
}
