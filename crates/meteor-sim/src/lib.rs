//! Meteor swarm scheduling for a host simulation.
//!
//! The wave scheduler state machine, its scatter-placement geometry, the
//! injected random source and the narrow ports a host implements. Also
//! ships a headless hecs-backed sandbox host and a fixed-rate engine loop
//! for deterministic runs.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod ports;
pub mod random;
pub mod sandbox;
pub mod scheduler;
pub mod snapshot;
pub mod state;

pub use engine::SimulationEngine;
pub use error::WaveError;
pub use meteor_core as core;
pub use scheduler::WaveScheduler;
