//! Stone Catch - simulation core for a timed "catch the falling stones" game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body pool, physics, collisions, spawning, round state)
//! - `session`: Wall-clock driver that turns host timestamps into simulation ticks
//! - `hud`: Per-tick output for the rendering/UI collaborators
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod hud;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use hud::{Frame, HudText};
pub use session::Session;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed physics sub-step (60 Hz)
    pub const FIXED_STEP: f32 = 1.0 / 60.0;
    /// Maximum sub-steps per tick before simulated time drops behind wall time
    pub const MAX_SUBSTEPS: u32 = 3;
    /// Host scheduler cadence in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 30;

    /// Falling bodies in the pool
    pub const NUM_BODIES: usize = 10;
    /// Ids 1..=HIGH_VALUE_BODIES are worth HIGH_VALUE_POINTS
    pub const HIGH_VALUE_BODIES: usize = 5;
    pub const HIGH_VALUE_POINTS: u32 = 5;
    pub const DEFAULT_POINTS: u32 = 3;
    pub const BODY_RADIUS: f32 = 0.03;

    /// Vertical acceleration (scene units/s²)
    pub const GRAVITY: f32 = -0.2;
    /// Fraction of velocity lost per second
    pub const LINEAR_DAMPING: f32 = 0.01;

    /// Round length in seconds
    pub const TIME_LIMIT: f32 = 40.0;
    /// Seconds between releases from the spawn queue
    pub const SPAWN_INTERVAL: f32 = 0.7;
    /// Height bodies are released from
    pub const DROP_HEIGHT: f32 = 0.35;
    /// Release x is drawn from [-SPAWN_HALF_RANGE, SPAWN_HALF_RANGE)
    pub const SPAWN_HALF_RANGE: f32 = 0.13;

    /// Shared z plane for bodies and collector
    pub const PLANE_Z: f32 = -0.1;
    /// Bodies at or below this y are misses
    pub const LOWER_BOUND: f32 = -0.3;
    /// Bodies with |x| at or beyond this are misses
    pub const HORIZONTAL_BOUND: f32 = 0.17;
    /// Off-screen parking spot for caught and queued bodies
    pub const HOLDING_X: f32 = -0.3;
    pub const HOLDING_Y: f32 = 0.3;

    /// Catch hitbox half-extents around the collector
    pub const HITBOX_HALF_X: f32 = 0.07;
    pub const HITBOX_HALF_Y: f32 = 0.05;
    /// Collector (basket) render half-size
    pub const COLLECTOR_HALF_SIZE: [f32; 3] = [0.03, 0.005, 0.03];

    pub const END_MESSAGE: &str = "Good Job!";
    pub const PAUSED_LABEL: &str = "- PAUSED -";
    pub const DEFAULT_SEED: u64 = 0x5EED_2020;
}
