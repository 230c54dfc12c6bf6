//! Fundamental geometric and identifier types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Identifier of one running event, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

/// Identifier of a target region (a station grid in the host world).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// Axis-aligned bounding box of a target region in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Center of the box.
    pub center: DVec2,
    /// Vector from the center to the top-right corner.
    pub half_extents: DVec2,
}

impl BoundingBox {
    pub fn new(center: DVec2, half_extents: DVec2) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Build a box from its bottom-left and top-right corners.
    pub fn from_corners(bottom_left: DVec2, top_right: DVec2) -> Self {
        let lo = bottom_left.min(top_right);
        let hi = bottom_left.max(top_right);
        Self {
            center: (lo + hi) * 0.5,
            half_extents: (hi - lo) * 0.5,
        }
    }

    pub fn top_right(&self) -> DVec2 {
        self.center + self.half_extents
    }

    pub fn bottom_left(&self) -> DVec2 {
        self.center - self.half_extents
    }

    /// Radius of the circle that circumscribes the box.
    pub fn radius(&self) -> f64 {
        self.half_extents.length()
    }

    pub fn contains(&self, point: DVec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

/// Inclusive integer range, sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Range holding a single value.
    pub const fn exactly(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Inclusive float range, sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn exactly(value: f64) -> Self {
        Self::new(value, value)
    }

    /// True when the bounds are inverted or not finite.
    pub fn is_empty(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max
    }
}

/// Simulation time tracking for the headless engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
