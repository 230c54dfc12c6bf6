//! Placement constants and configuration defaults.

// --- Scatter placement ---

/// Distance added beyond the target's circumscribed circle before any spawn.
pub const SPAWN_MARGIN: f64 = 50.0;

/// Width of the annulus spawns are drawn from.
pub const SPAWN_SPREAD_BAND: f64 = 100.0;

/// Lateral offset is at most the target radius divided by this.
pub const LATERAL_SPREAD_DIVISOR: f64 = 3.0;

/// Chance of offsetting to the left of the bearing rather than the right.
pub const LATERAL_LEFT_PROBABILITY: f64 = 0.5;

// --- Defaults ---

/// Waves per event.
pub const DEFAULT_WAVES_MIN: i32 = 3;
pub const DEFAULT_WAVES_MAX: i32 = 3;

/// Seconds between waves.
pub const DEFAULT_WAVE_COOLDOWN_MIN: f64 = 10.0;
pub const DEFAULT_WAVE_COOLDOWN_MAX: f64 = 60.0;

/// Meteors per wave.
pub const DEFAULT_METEORS_MIN: i32 = 3;
pub const DEFAULT_METEORS_MAX: i32 = 3;

/// Seconds between the last wave and the end announcement.
pub const DEFAULT_END_DELAY_SECS: f64 = 60.0;

/// Impulse per unit of mass.
pub const DEFAULT_METEOR_SPEED: f64 = 10.0;

pub const DEFAULT_METEOR_KIND: &str = "MeteorMedium";

// --- Sandbox host ---

/// Default scheduling rate of the headless engine (Hz).
pub const TICK_RATE: u32 = 30;

/// Meteors farther than this from the origin are despawned.
pub const SANDBOX_WORLD_RADIUS: f64 = 10_000.0;

/// Distance between neighbouring station centers in the default layout.
pub const STATION_SPACING: f64 = 1_500.0;

/// Station grid half extents in the default layout (width, height).
pub const STATION_HALF_EXTENTS: (f64, f64) = (60.0, 40.0);

/// Meteor prototypes known to the sandbox: (kind, mass).
pub const METEOR_PROTOTYPES: [(&str, f64); 4] = [
    ("MeteorSpaceDust", 5.0),
    ("MeteorSmall", 25.0),
    ("MeteorMedium", 50.0),
    ("MeteorLarge", 100.0),
];
