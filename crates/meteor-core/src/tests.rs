#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::config::WaveEventConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{Announcement, WaveEvent};
    use crate::types::{BoundingBox, EventId, FloatRange, IntRange, RegionId};

    #[test]
    fn test_default_config_is_valid() {
        let config = WaveEventConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.non_directional);
        assert_eq!(config.meteors.len(), 1);
    }

    #[test]
    fn test_config_missing_fields_take_defaults() {
        let config = WaveEventConfig::from_json_str(r#"{ "non_directional": true }"#).unwrap();
        let defaults = WaveEventConfig::default();
        assert!(config.non_directional);
        assert_eq!(config.wave_count, defaults.wave_count);
        assert_eq!(config.wave_cooldown, defaults.wave_cooldown);
        assert_eq!(config.end_delay_secs, defaults.end_delay_secs);
    }

    #[test]
    fn test_config_full_json() {
        let json = r#"{
            "wave_count": { "min": 2, "max": 4 },
            "wave_cooldown": { "min": 5.0, "max": 7.5 },
            "meteors_per_wave": { "min": 1, "max": 6 },
            "end_delay_secs": 30.0,
            "meteors": ["MeteorSmall", "MeteorLarge"],
            "meteor_speed": 12.0,
            "start_announcement": "station-event-meteor-swarm-start",
            "end_sound": "meteors_end"
        }"#;
        let config = WaveEventConfig::from_json_str(json).unwrap();
        assert_eq!(config.wave_count, IntRange::new(2, 4));
        assert_eq!(config.wave_cooldown, FloatRange::new(5.0, 7.5));
        assert_eq!(config.meteors, vec!["MeteorSmall", "MeteorLarge"]);
        assert_eq!(config.end_sound.as_deref(), Some("meteors_end"));
        assert!(config.start_sound.is_none());
    }

    #[test]
    fn test_config_rejects_empty_spawn_types() {
        let config = WaveEventConfig {
            meteors: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoSpawnTypes)));
    }

    #[test]
    fn test_config_rejects_inverted_wave_count() {
        let config = WaveEventConfig {
            wave_count: IntRange::new(3, 1),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaveCount { min: 3, max: 1 })
        ));
    }

    #[test]
    fn test_config_rejects_non_positive_cooldown() {
        for cooldown in [
            FloatRange::new(0.0, 10.0),
            FloatRange::new(-5.0, -1.0),
            FloatRange::new(10.0, 5.0),
            FloatRange::new(f64::NAN, 5.0),
        ] {
            let config = WaveEventConfig {
                wave_cooldown: cooldown,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidCooldown { .. })),
                "cooldown {cooldown:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_rejects_bad_scalars() {
        let config = WaveEventConfig {
            end_delay_secs: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndDelay(_))));

        let config = WaveEventConfig {
            meteor_speed: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));

        let config = WaveEventConfig {
            meteors_per_wave: IntRange::new(-1, 2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMeteorsPerWave { .. })
        ));
    }

    #[test]
    fn test_config_malformed_json() {
        let err = WaveEventConfig::from_json_str("{ wave_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_json_is_validated() {
        let err = WaveEventConfig::from_json_str(r#"{ "meteors": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoSpawnTypes));
    }

    #[test]
    fn test_bearing_policy_follows_flag() {
        let directional = WaveEventConfig::default();
        assert_eq!(directional.bearing_policy(1.25), BearingPolicy::Fixed(1.25));

        let scatter = WaveEventConfig {
            non_directional: true,
            ..Default::default()
        };
        assert_eq!(scatter.bearing_policy(1.25), BearingPolicy::Scatter);
    }

    #[test]
    fn test_bounding_box_from_corners() {
        let bbox = BoundingBox::from_corners(DVec2::new(10.0, -20.0), DVec2::new(-10.0, 20.0));
        assert_eq!(bbox.center, DVec2::ZERO);
        assert_eq!(bbox.half_extents, DVec2::new(10.0, 20.0));
        assert_eq!(bbox.top_right(), DVec2::new(10.0, 20.0));
        assert_eq!(bbox.bottom_left(), DVec2::new(-10.0, -20.0));
        assert!((bbox.radius() - 500f64.sqrt()).abs() < 1e-12);
        assert!(bbox.contains(DVec2::new(9.0, -19.0)));
        assert!(!bbox.contains(DVec2::new(11.0, 0.0)));
    }

    #[test]
    fn test_announcement_from_parts() {
        assert!(Announcement::from_parts(None, None).is_none());

        let sound_only = Announcement::from_parts(None, Some("alarm")).unwrap();
        assert!(sound_only.message.is_none());
        assert_eq!(sound_only.sound.as_deref(), Some("alarm"));
        assert_eq!(sound_only.scope, AudienceScope::InGame);
    }

    #[test]
    fn test_tick_outcome_is_finished() {
        assert!(!TickOutcome::Continue.is_finished());
        assert!(TickOutcome::Terminated.is_finished());
        assert!(TickOutcome::AlreadyTerminated.is_finished());
        assert!(WavePhase::Terminated.is_terminal());
        assert!(!WavePhase::Ending.is_terminal());
    }

    #[test]
    fn test_wave_event_serde_tagged() {
        let event = WaveEvent::WaveSpawned {
            event: EventId(7),
            region: RegionId(2),
            meteors: 3,
            waves_remaining: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WaveSpawned\""));
        let back: WaveEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
