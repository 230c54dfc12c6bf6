//! Narrow interfaces the host simulation implements for the scheduler.

use std::fmt::Debug;

use glam::DVec2;

use meteor_core::error::{DeliveryError, SpawnError};
use meteor_core::events::Announcement;
use meteor_core::types::{BoundingBox, EventId, RegionId};

/// Instantiates meteors and pushes them around.
pub trait SpawnEffector {
    /// Host handle for a spawned object.
    type Handle: Copy + Debug;

    /// Whether `kind` names a spawnable prototype. Checked at activation.
    fn is_known_type(&self, kind: &str) -> bool {
        let _ = kind;
        true
    }

    fn spawn(&mut self, kind: &str, position: DVec2) -> Result<Self::Handle, SpawnError>;

    /// Mass of a spawned object, used to scale its initial impulse.
    fn mass(&self, handle: Self::Handle) -> f64;

    fn apply_impulse(&mut self, handle: Self::Handle, direction: DVec2, magnitude: f64);

    /// Regions currently eligible as targets. May be empty.
    fn target_regions(&self) -> Vec<RegionId>;

    /// Bounding box of a region, or `None` if it has no geometry right now.
    fn bounding_box(&self, region: RegionId) -> Option<BoundingBox>;
}

/// Emits start and end notifications.
pub trait AnnouncementPort {
    fn announce(&mut self, announcement: &Announcement) -> Result<(), DeliveryError>;
}

/// Everything the scheduler needs from its host, plus the liveness checks
/// each tick re-runs before touching state.
pub trait EventHost: SpawnEffector + AnnouncementPort {
    /// The host still considers this event running.
    fn is_event_active(&self, event: EventId) -> bool;

    /// The entity owning this event has been removed from the world.
    fn is_event_deleted(&self, event: EventId) -> bool;
}
