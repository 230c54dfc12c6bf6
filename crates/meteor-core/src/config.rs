//! Event configuration. Supplied by the host at activation, immutable after.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::BearingPolicy;
use crate::error::ConfigError;
use crate::events::Announcement;
use crate::types::{FloatRange, IntRange};

/// Tuning for one meteor swarm event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveEventConfig {
    /// Number of waves, sampled once at activation.
    #[serde(default = "default_wave_count")]
    pub wave_count: IntRange,
    /// Seconds until the next wave, sampled each time a wave comes due.
    #[serde(default = "default_wave_cooldown")]
    pub wave_cooldown: FloatRange,
    /// Meteors per wave, sampled per wave.
    #[serde(default = "default_meteors_per_wave")]
    pub meteors_per_wave: IntRange,
    /// Seconds between the last wave and the end announcement.
    #[serde(default = "default_end_delay")]
    pub end_delay_secs: f64,
    /// Candidate meteor types, one picked uniformly per meteor.
    #[serde(default = "default_meteors")]
    pub meteors: Vec<String>,
    /// Impulse per unit mass given to each meteor.
    #[serde(default = "default_meteor_speed")]
    pub meteor_speed: f64,
    /// Scatter bearings per meteor instead of one bearing per event.
    #[serde(default)]
    pub non_directional: bool,
    #[serde(default)]
    pub start_announcement: Option<String>,
    #[serde(default)]
    pub start_sound: Option<String>,
    #[serde(default)]
    pub end_announcement: Option<String>,
    #[serde(default)]
    pub end_sound: Option<String>,
}

fn default_wave_count() -> IntRange {
    IntRange::new(DEFAULT_WAVES_MIN, DEFAULT_WAVES_MAX)
}
fn default_wave_cooldown() -> FloatRange {
    FloatRange::new(DEFAULT_WAVE_COOLDOWN_MIN, DEFAULT_WAVE_COOLDOWN_MAX)
}
fn default_meteors_per_wave() -> IntRange {
    IntRange::new(DEFAULT_METEORS_MIN, DEFAULT_METEORS_MAX)
}
fn default_end_delay() -> f64 {
    DEFAULT_END_DELAY_SECS
}
fn default_meteors() -> Vec<String> {
    vec![DEFAULT_METEOR_KIND.to_owned()]
}
fn default_meteor_speed() -> f64 {
    DEFAULT_METEOR_SPEED
}

impl Default for WaveEventConfig {
    fn default() -> Self {
        Self {
            wave_count: default_wave_count(),
            wave_cooldown: default_wave_cooldown(),
            meteors_per_wave: default_meteors_per_wave(),
            end_delay_secs: default_end_delay(),
            meteors: default_meteors(),
            meteor_speed: default_meteor_speed(),
            non_directional: false,
            start_announcement: None,
            start_sound: None,
            end_announcement: None,
            end_sound: None,
        }
    }
}

impl WaveEventConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Check every field. Called by activation before any state exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meteors.is_empty() {
            return Err(ConfigError::NoSpawnTypes);
        }

        let waves = self.wave_count;
        if waves.is_empty() || waves.min < 0 {
            return Err(ConfigError::InvalidWaveCount {
                min: waves.min,
                max: waves.max,
            });
        }

        let cooldown = self.wave_cooldown;
        if cooldown.is_empty() || cooldown.min <= 0.0 {
            return Err(ConfigError::InvalidCooldown {
                min: cooldown.min,
                max: cooldown.max,
            });
        }

        let per_wave = self.meteors_per_wave;
        if per_wave.is_empty() || per_wave.min < 0 {
            return Err(ConfigError::InvalidMeteorsPerWave {
                min: per_wave.min,
                max: per_wave.max,
            });
        }

        if !self.end_delay_secs.is_finite() || self.end_delay_secs < 0.0 {
            return Err(ConfigError::InvalidEndDelay(self.end_delay_secs));
        }

        if !self.meteor_speed.is_finite() || self.meteor_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.meteor_speed));
        }

        Ok(())
    }

    pub fn start(&self) -> Option<Announcement> {
        Announcement::from_parts(
            self.start_announcement.as_deref(),
            self.start_sound.as_deref(),
        )
    }

    pub fn end(&self) -> Option<Announcement> {
        Announcement::from_parts(self.end_announcement.as_deref(), self.end_sound.as_deref())
    }

    /// Bearing policy for an event whose directional bearing is `bearing`.
    pub fn bearing_policy(&self, bearing: f64) -> BearingPolicy {
        if self.non_directional {
            BearingPolicy::Scatter
        } else {
            BearingPolicy::Fixed(bearing)
        }
    }
}
