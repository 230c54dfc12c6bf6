//! Enumeration types used throughout the event.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a wave event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WavePhase {
    /// Created but not yet activated.
    #[default]
    Pending,
    /// Spawning waves.
    Active,
    /// Last wave fired, counting down to the end announcement.
    Ending,
    /// End announcement emitted. Absorbing.
    Terminated,
}

impl WavePhase {
    pub fn is_terminal(self) -> bool {
        self == WavePhase::Terminated
    }
}

/// What a single tick tells the host about the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// The event is still running; keep ticking.
    Continue,
    /// The end announcement fired on this tick; retire the event.
    Terminated,
    /// The event had already terminated before this tick.
    AlreadyTerminated,
}

impl TickOutcome {
    /// Whether the host should retire the event.
    pub fn is_finished(self) -> bool {
        !matches!(self, TickOutcome::Continue)
    }
}

/// Who receives an announcement. Resolving the scope to concrete
/// participants is the host's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudienceScope {
    /// Participants who have joined the running round (not the lobby).
    #[default]
    InGame,
}

/// How the primary spawn bearing is chosen for each object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BearingPolicy {
    /// Fresh uniform angle for every object.
    Scatter,
    /// Every object uses the same bearing (radians).
    Fixed(f64),
}
