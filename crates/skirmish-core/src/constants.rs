//! Simulation constants and tuning parameters.

/// Frame length (ms) that speed constants are calibrated against (~60Hz).
pub const REFERENCE_FRAME_MS: f64 = 16.6;

// --- World ---

/// Default battlefield width for the built-in skirmish map.
pub const WORLD_WIDTH: f32 = 1280.0;

/// Default battlefield height for the built-in skirmish map.
pub const WORLD_HEIGHT: f32 = 720.0;

// --- Kinematics ---

/// Blend factor applied when folding steering into velocity.
pub const VELOCITY_SMOOTHING: f32 = 0.1;

/// Minimum speed before the facing angle is updated.
pub const HEADING_MIN_SPEED: f32 = 0.1;

/// Offset added to the velocity angle so the sprite nose points forward.
pub const HEADING_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

// --- Combat ---

/// Damage dealt per point of attacker max force on each hit.
pub const DAMAGE_PER_FORCE: f32 = 10.0;

// --- Capture nodes ---

/// Radius within which units exert influence on a node.
pub const CAPTURE_RADIUS: f32 = 150.0;

/// Progress gained per tick by the team with more units nearby.
pub const CAPTURE_RATE: f32 = 0.5;

/// Magnitude at which a node flips to full ownership.
pub const CAPTURE_PROGRESS_MAX: f32 = 100.0;

/// Below this magnitude a node reverts to neutral.
pub const NEUTRAL_BAND: f32 = 10.0;

// --- Spawning ---

/// Simulated milliseconds between production sweeps.
pub const SPAWN_INTERVAL_MS: f64 = 3000.0;

/// Maximum active roster size per team.
pub const ROSTER_CAP: usize = 100;

// --- Frigate hangar ---

/// Number of units a frigate can carry.
pub const HANGAR_CAPACITY: usize = 2;

/// HP restored per second to damaged docked units.
pub const HANGAR_REGEN_PER_SEC: f32 = 5.0;

// --- Environment ---

/// Default speed multiplier inside a nebula.
pub const NEBULA_SLOW_FACTOR: f32 = 0.4;

/// Asteroid collision radius.
pub const ASTEROID_RADIUS: f32 = 24.0;

/// HP drained per second from units overlapping an asteroid.
pub const ASTEROID_DAMAGE_PER_SEC: f32 = 5.0;

/// Maximum drift speed per axis (world units per second).
pub const ASTEROID_MAX_DRIFT: f32 = 20.0;

/// Spin per reference frame (radians, 0.5 degrees).
pub const ASTEROID_SPIN_PER_FRAME: f32 = 0.5 * std::f32::consts::PI / 180.0;
