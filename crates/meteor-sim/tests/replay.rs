//! End-to-end runs of the engine from a JSON event config.

use meteor_sim::core::config::WaveEventConfig;
use meteor_sim::core::events::WaveEvent;
use meteor_sim::core::types::EventId;
use meteor_sim::engine::{SimConfig, SimulationEngine};
use meteor_sim::sandbox::{HostCall, Sandbox};

const CONFIG: &str = r#"{
    "wave_count": { "min": 2, "max": 4 },
    "wave_cooldown": { "min": 5.0, "max": 20.0 },
    "meteors_per_wave": { "min": 1, "max": 5 },
    "end_delay_secs": 30.0,
    "meteors": ["MeteorSmall", "MeteorMedium", "MeteorLarge"],
    "non_directional": true,
    "start_announcement": "station-event-meteor-swarm-start-announcement",
    "start_sound": "meteors",
    "end_announcement": "station-event-meteor-swarm-end-announcement"
}"#;

fn replay(seed: u64) -> (Vec<WaveEvent>, Vec<HostCall>) {
    let config = WaveEventConfig::from_json_str(CONFIG).expect("config parses");
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        stations: 3,
        ..Default::default()
    });
    engine.start_event(config).expect("event starts");

    let snapshots = engine.run_until_idle(600.0).expect("run succeeds");
    let events = snapshots
        .into_iter()
        .flat_map(|s| s.wave_events)
        .collect();
    let calls = engine.sandbox_mut().take_calls();
    (events, calls)
}

#[test]
fn replay_is_reproducible() {
    let (events_a, calls_a) = replay(77);
    let (events_b, calls_b) = replay(77);
    assert_eq!(
        serde_json::to_string(&events_a).unwrap(),
        serde_json::to_string(&events_b).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&calls_a).unwrap(),
        serde_json::to_string(&calls_b).unwrap()
    );
}

#[test]
fn replay_follows_event_lifecycle() {
    for seed in [1, 2, 3, 4, 5] {
        let (events, calls) = replay(seed);

        let Some(WaveEvent::Started { event, waves, .. }) = events.first() else {
            panic!("seed {seed}: first event should be Started, got {:?}", events.first());
        };
        assert_eq!(*event, EventId(0));
        assert!((2..=4).contains(waves));

        let spawned: Vec<(u32, i32)> = events
            .iter()
            .filter_map(|e| match e {
                WaveEvent::WaveSpawned {
                    meteors,
                    waves_remaining,
                    ..
                } => Some((*meteors, *waves_remaining)),
                _ => None,
            })
            .collect();
        assert_eq!(spawned.len(), *waves as usize, "seed {seed}");
        for (i, (meteors, remaining)) in spawned.iter().enumerate() {
            assert!((1..=5).contains(meteors));
            assert_eq!(*remaining, waves - 1 - i as i32);
        }

        assert!(matches!(
            events[events.len() - 2],
            WaveEvent::EndingStarted { .. }
        ));
        assert!(matches!(events.last(), Some(WaveEvent::Ended { .. })));

        let announcements: Vec<&HostCall> = calls
            .iter()
            .filter(|c| matches!(c, HostCall::Announce { .. }))
            .collect();
        assert_eq!(announcements.len(), 2, "seed {seed}: one start, one end");

        let total: u32 = spawned.iter().map(|(m, _)| m).sum();
        let spawn_calls = calls
            .iter()
            .filter(|c| matches!(c, HostCall::Spawn { .. }))
            .count();
        assert_eq!(spawn_calls as u32, total);
    }
}

#[test]
fn events_run_side_by_side() {
    let config = WaveEventConfig::from_json_str(CONFIG).unwrap();
    let mut engine = SimulationEngine::with_sandbox(SimConfig::default(), Sandbox::with_stations(2));
    let first = engine.start_event(config.clone()).unwrap();
    for _ in 0..90 {
        engine.tick().unwrap();
    }
    let second = engine.start_event(config).unwrap();
    assert_ne!(first, second);
    assert_eq!(engine.active_events(), 2);

    let snapshots = engine.run_until_idle(1_200.0).unwrap();
    let ended: Vec<EventId> = snapshots
        .iter()
        .flat_map(|s| s.wave_events.iter())
        .filter_map(|e| match e {
            WaveEvent::Ended { event, .. } => Some(*event),
            _ => None,
        })
        .collect();
    assert_eq!(ended.len(), 2);
    assert!(ended.contains(&first) && ended.contains(&second));
}
