//! Game tuning
//!
//! Every constant the simulation reads lives in `GameConfig`, defaulting to
//! `crate::consts`. A JSON file can override any subset of fields.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "STONE_CATCH_CONFIG";

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Pool ===
    /// Number of falling bodies (ids 1..=num_bodies)
    pub num_bodies: usize,
    /// Ids 1..=high_value_bodies score `high_value_points`
    pub high_value_bodies: usize,
    pub high_value_points: u32,
    pub default_points: u32,
    pub body_radius: f32,

    // === Physics ===
    pub gravity: f32,
    pub linear_damping: f32,
    pub fixed_step: f32,
    pub max_substeps: u32,

    // === Round ===
    pub time_limit: f32,
    pub spawn_interval: f32,
    pub drop_height: f32,
    pub spawn_half_range: f32,

    // === Geometry ===
    pub plane_z: f32,
    pub lower_bound: f32,
    pub horizontal_bound: f32,
    pub holding_position: Vec2,
    pub hitbox: Vec2,
    pub collector_half_size: Vec3,

    // === Text ===
    pub end_message: String,

    /// Seed for spawn order and release positions
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_bodies: NUM_BODIES,
            high_value_bodies: HIGH_VALUE_BODIES,
            high_value_points: HIGH_VALUE_POINTS,
            default_points: DEFAULT_POINTS,
            body_radius: BODY_RADIUS,

            gravity: GRAVITY,
            linear_damping: LINEAR_DAMPING,
            fixed_step: FIXED_STEP,
            max_substeps: MAX_SUBSTEPS,

            time_limit: TIME_LIMIT,
            spawn_interval: SPAWN_INTERVAL,
            drop_height: DROP_HEIGHT,
            spawn_half_range: SPAWN_HALF_RANGE,

            plane_z: PLANE_Z,
            lower_bound: LOWER_BOUND,
            horizontal_bound: HORIZONTAL_BOUND,
            holding_position: Vec2::new(HOLDING_X, HOLDING_Y),
            hitbox: Vec2::new(HITBOX_HALF_X, HITBOX_HALF_Y),
            collector_half_size: Vec3::from_array(COLLECTOR_HALF_SIZE),

            end_message: END_MESSAGE.to_string(),

            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `STONE_CATCH_CONFIG`, or fall back to defaults
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}, using defaults", path, err);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        let floats = [
            ("body_radius", self.body_radius),
            ("gravity", self.gravity),
            ("linear_damping", self.linear_damping),
            ("fixed_step", self.fixed_step),
            ("time_limit", self.time_limit),
            ("spawn_interval", self.spawn_interval),
            ("drop_height", self.drop_height),
            ("spawn_half_range", self.spawn_half_range),
            ("plane_z", self.plane_z),
            ("lower_bound", self.lower_bound),
            ("horizontal_bound", self.horizontal_bound),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
        }
        if !self.holding_position.is_finite() {
            return invalid("holding_position", "must be finite");
        }
        if !self.hitbox.is_finite() {
            return invalid("hitbox", "must be finite");
        }
        if !self.collector_half_size.is_finite() {
            return invalid("collector_half_size", "must be finite");
        }

        if self.num_bodies == 0 {
            return invalid("num_bodies", "must be at least 1");
        }
        if self.high_value_bodies > self.num_bodies {
            return invalid("high_value_bodies", "must not exceed num_bodies");
        }
        if !(self.fixed_step > 0.0) {
            return invalid("fixed_step", "must be positive");
        }
        if self.max_substeps == 0 {
            return invalid("max_substeps", "must be at least 1");
        }
        if !(self.gravity < 0.0) {
            return invalid("gravity", "must be negative (downward)");
        }
        if !(0.0..1.0).contains(&self.linear_damping) {
            return invalid("linear_damping", "must be in [0, 1)");
        }
        if !(self.time_limit > 0.0) {
            return invalid("time_limit", "must be positive");
        }
        if !(self.spawn_interval > 0.0) {
            return invalid("spawn_interval", "must be positive");
        }
        if !(self.spawn_half_range >= 0.0) {
            return invalid("spawn_half_range", "must not be negative");
        }
        if !(2.0 * self.spawn_half_range).is_finite() {
            return invalid("spawn_half_range", "is too large");
        }
        if self.hitbox.x < 0.0 || self.hitbox.y < 0.0 {
            return invalid("hitbox", "extents must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = GameConfig::default();
        assert_eq!(config.num_bodies, 10);
        assert_eq!(config.time_limit, 40.0);
        assert_eq!(config.hitbox, Vec2::new(0.07, 0.05));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "time_limit": 20.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.time_limit, 20.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn_interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = GameConfig::from_json(r#"{ "gravity": 0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_high_value_overflow() {
        let config = GameConfig {
            num_bodies: 3,
            high_value_bodies: 4,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "high_value_bodies", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // 1e39 overflows f32 and parses as infinity
        for (json, field) in [
            (r#"{ "spawn_half_range": 1e39 }"#, "spawn_half_range"),
            (r#"{ "drop_height": 1e39 }"#, "drop_height"),
            (r#"{ "lower_bound": -1e39 }"#, "lower_bound"),
            (r#"{ "hitbox": [1e39, 0.05] }"#, "hitbox"),
        ] {
            let err = GameConfig::from_json(json).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { field: f, .. } if f == field),
                "{json}: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_overflowing_spawn_range() {
        let config = GameConfig {
            spawn_half_range: f32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "spawn_half_range", .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::from_file("/nonexistent/stone-catch.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
