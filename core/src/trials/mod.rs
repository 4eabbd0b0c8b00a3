//! Trial batches and parameter sweeps
//!
//! One trial = one complete run from a fresh randomized initial state to
//! termination, producing one scalar outcome. This module runs batches of
//! independent trials and aggregates their means, and sweeps a parameter
//! across a range of values for strategy comparison.
//!
//! Non-converging trials (runs that hit the step cap) are excluded from
//! the means; `TrialStats` reports how many trials were counted so the
//! caller can see the exclusion.
//!
//! # Determinism
//!
//! Per-trial seeds are derived from a parent generator seeded by the
//! configuration, so a whole batch (and a whole sweep) reproduces exactly
//! from one seed while every trial stays an independent draw. Trials run
//! sequentially here; nothing is shared between them beyond the derived
//! u64 seed, so an external batch layer may parallelize them safely.
//!
//! # Example
//!
//! ```
//! use mobility_simulator_core_rs::robot::{RobotConfig, RobotStrategy};
//! use mobility_simulator_core_rs::trials::mean_steps_to_coverage;
//!
//! let config = RobotConfig {
//!     width: 5,
//!     height: 5,
//!     num_obstacles: 5,
//!     velocity: 1.0,
//!     min_coverage: 0.8,
//!     strategy: RobotStrategy::Standard,
//!     rng_seed: 12345,
//! };
//!
//! let stats = mean_steps_to_coverage(&config, 20).unwrap();
//! assert_eq!(stats.trials_run, 20);
//! ```

use crate::elevator::{ElevatorConfig, SimulationEngine};
use crate::errors::ConfigError;
use crate::rng::RngManager;
use crate::robot::{CoverageEngine, RobotConfig};
use serde::{Deserialize, Serialize};

/// Aggregate outcome of a batch of trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialStats {
    /// Mean outcome over the counted trials; None when every trial was
    /// excluded (all hit the step cap) or none were requested
    pub mean: Option<f64>,

    /// Trials executed
    pub trials_run: usize,

    /// Trials included in the mean (converged runs only)
    pub trials_counted: usize,
}

impl TrialStats {
    fn from_outcomes(outcomes: &[f64], trials_run: usize) -> Self {
        let mean = if outcomes.is_empty() {
            None
        } else {
            Some(outcomes.iter().sum::<f64>() / outcomes.len() as f64)
        };
        Self {
            mean,
            trials_run,
            trials_counted: outcomes.len(),
        }
    }
}

/// One point of a parameter sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// The swept parameter value
    pub value: usize,

    /// Batch statistics at this value
    pub stats: TrialStats,
}

/// Result of sweeping one parameter, ordered as requested
///
/// This is the mapping the external plotting collaborator consumes;
/// `to_json` serializes it at the boundary so no interface points back
/// into the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Name of the swept parameter (e.g. "num_obstacles")
    pub parameter: String,

    /// One entry per swept value, in the order requested
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Serialize the report to JSON for the plotting collaborator
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Mean steps-to-coverage over `num_trials` independent robot trials
///
/// Each trial gets a fresh room, robot, and RNG (seed derived from
/// `config.rng_seed`). Capped trials are excluded from the mean.
pub fn mean_steps_to_coverage(
    config: &RobotConfig,
    num_trials: usize,
) -> Result<TrialStats, ConfigError> {
    config.validate()?;

    let mut parent = RngManager::new(config.rng_seed);
    let mut outcomes = Vec::with_capacity(num_trials);

    for _ in 0..num_trials {
        let mut trial_config = config.clone();
        trial_config.rng_seed = parent.next();

        let result = CoverageEngine::new(trial_config)?.run();
        if result.converged {
            outcomes.push(result.steps as f64);
        }
    }

    Ok(TrialStats::from_outcomes(&outcomes, num_trials))
}

/// Mean average-journey-time over `num_trials` independent elevator trials
///
/// Each trial gets fresh passenger journeys and a fresh elevator (seed
/// derived from `config.rng_seed`). Capped trials are excluded from the
/// mean.
pub fn mean_journey_time(
    config: &ElevatorConfig,
    num_trials: usize,
) -> Result<TrialStats, ConfigError> {
    config.validate()?;

    let mut parent = RngManager::new(config.rng_seed);
    let mut outcomes = Vec::with_capacity(num_trials);

    for _ in 0..num_trials {
        let mut trial_config = config.clone();
        trial_config.rng_seed = parent.next();

        let result = SimulationEngine::new(trial_config)?.run();
        if result.converged {
            outcomes.push(result.average_journey_time);
        }
    }

    Ok(TrialStats::from_outcomes(&outcomes, num_trials))
}

/// Sweep the obstacle count of a robot configuration
pub fn sweep_obstacle_counts(
    base: &RobotConfig,
    counts: &[usize],
    trials_per_point: usize,
) -> Result<SweepReport, ConfigError> {
    let mut parent = RngManager::new(base.rng_seed);
    let mut points = Vec::with_capacity(counts.len());

    for &count in counts {
        let mut config = base.clone();
        config.num_obstacles = count;
        config.rng_seed = parent.next();

        let stats = mean_steps_to_coverage(&config, trials_per_point)?;
        points.push(SweepPoint {
            value: count,
            stats,
        });
    }

    Ok(SweepReport {
        parameter: "num_obstacles".to_string(),
        points,
    })
}

/// Sweep the passenger count of an elevator configuration
pub fn sweep_passenger_counts(
    base: &ElevatorConfig,
    counts: &[usize],
    trials_per_point: usize,
) -> Result<SweepReport, ConfigError> {
    let mut parent = RngManager::new(base.rng_seed);
    let mut points = Vec::with_capacity(counts.len());

    for &count in counts {
        let mut config = base.clone();
        config.total_passengers = count;
        config.rng_seed = parent.next();

        let stats = mean_journey_time(&config, trials_per_point)?;
        points.push(SweepPoint {
            value: count,
            stats,
        });
    }

    Ok(SweepReport {
        parameter: "total_passengers".to_string(),
        points,
    })
}

/// Sweep the floor count of an elevator configuration
///
/// Every swept value must itself be a valid floor count (>= 2); an
/// invalid value fails the whole sweep fast rather than producing a
/// partially filled report.
pub fn sweep_floor_counts(
    base: &ElevatorConfig,
    counts: &[usize],
    trials_per_point: usize,
) -> Result<SweepReport, ConfigError> {
    let mut parent = RngManager::new(base.rng_seed);
    let mut points = Vec::with_capacity(counts.len());

    for &count in counts {
        let mut config = base.clone();
        config.num_floors = count;
        config.rng_seed = parent.next();

        let stats = mean_journey_time(&config, trials_per_point)?;
        points.push(SweepPoint {
            value: count,
            stats,
        });
    }

    Ok(SweepReport {
        parameter: "num_floors".to_string(),
        points,
    })
}

/// Sweep the capacity of an elevator configuration
pub fn sweep_capacities(
    base: &ElevatorConfig,
    capacities: &[usize],
    trials_per_point: usize,
) -> Result<SweepReport, ConfigError> {
    let mut parent = RngManager::new(base.rng_seed);
    let mut points = Vec::with_capacity(capacities.len());

    for &capacity in capacities {
        let mut config = base.clone();
        config.capacity = capacity;
        config.rng_seed = parent.next();

        let stats = mean_journey_time(&config, trials_per_point)?;
        points.push(SweepPoint {
            value: capacity,
            stats,
        });
    }

    Ok(SweepReport {
        parameter: "capacity".to_string(),
        points,
    })
}
