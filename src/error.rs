//! Configuration errors
//!
//! The simulation itself never fails; only loading a `GameConfig` can.

use thiserror::Error;

/// Errors raised while loading or validating a `GameConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid JSON for `GameConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}
