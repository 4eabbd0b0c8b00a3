//! Configuration error taxonomy
//!
//! Invalid configuration fails fast at construction with a descriptive
//! condition; it never surfaces mid-run. Non-convergence (the step cap)
//! is deliberately NOT here — a capped run is a defined trial outcome,
//! filtered by the trial layer.

use thiserror::Error;

/// Errors raised when validating a simulation configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Robot velocity must be greater than zero, got {velocity}")]
    NonPositiveVelocity { velocity: f64 },

    #[error("Room dimensions must be positive, got {width}x{height}")]
    EmptyRoom { width: usize, height: usize },

    #[error("Obstacle count {requested} exceeds tile count {tiles}")]
    TooManyObstacles { requested: usize, tiles: usize },

    #[error("Minimum coverage must be within [0, 1], got {min_coverage}")]
    InvalidCoverage { min_coverage: f64 },

    #[error("Building needs at least 2 floors for a valid journey, got {num_floors}")]
    TooFewFloors { num_floors: usize },

    #[error("Elevator capacity must be at least 1")]
    ZeroCapacity,
}
