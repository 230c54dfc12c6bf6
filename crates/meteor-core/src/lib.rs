//! Core types and definitions for the meteor swarm event.
//!
//! This crate defines the vocabulary shared across the other crates:
//! event configuration, ranges, bounding geometry, phases, events,
//! error types and tuning constants. It has no dependency on any host
//! simulation or runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod types;

pub use config::WaveEventConfig;
pub use error::{ConfigError, DeliveryError, SpawnError};

#[cfg(test)]
mod tests;
