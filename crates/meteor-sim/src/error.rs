//! Errors surfaced by a running scheduler.

use thiserror::Error;

use meteor_core::error::SpawnError;
use meteor_core::types::EventId;

#[derive(Debug, Error)]
pub enum WaveError {
    /// The host could not instantiate a configured meteor type.
    #[error("event {event:?}: spawn failed: {source}")]
    Spawn {
        event: EventId,
        #[source]
        source: SpawnError,
    },
}
