//! ECS components of the sandbox world.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use meteor_core::types::{BoundingBox, RegionId};

/// A station that meteor swarms can target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub region: RegionId,
    /// Meteors that reached the station's grid.
    pub impacts: u32,
}

/// World-space bounds of a station's largest grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds(pub BoundingBox);

/// Marker for a spawned meteor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteor {
    pub kind: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Physics mass (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass(pub f64);
