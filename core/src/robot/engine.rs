//! Robot coverage trial runner
//!
//! Drives one cleaning run to completion: generate a fresh room and
//! robot, then step the movement strategy until the cleaned-tile count
//! reaches the requested fraction of the empty tiles, bounded by the
//! step cap. A capped run is the infinity-surrogate outcome the batch
//! layer filters out of aggregate statistics.

use crate::core::time::{StepCounter, MAX_STEPS};
use crate::errors::ConfigError;
use crate::events::EventLog;
use crate::rng::RngManager;
use crate::robot::robot::{Robot, RobotStrategy};
use crate::robot::room::Room;
use serde::{Deserialize, Serialize};

/// Complete robot simulation configuration
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::robot::{RobotConfig, RobotStrategy, CoverageEngine};
///
/// let config = RobotConfig {
///     width: 5,
///     height: 5,
///     num_obstacles: 5,
///     velocity: 1.0,
///     min_coverage: 0.8,
///     strategy: RobotStrategy::Standard,
///     rng_seed: 12345,
/// };
///
/// let mut engine = CoverageEngine::new(config).unwrap();
/// let result = engine.run();
/// assert!(result.steps <= 10_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Room size along x (must be positive)
    pub width: usize,

    /// Room size along y (must be positive)
    pub height: usize,

    /// Obstacles sampled at room generation (must fit the grid)
    pub num_obstacles: usize,

    /// Robot velocity in tiles per step (must be positive)
    pub velocity: f64,

    /// Fraction of empty tiles to clean before the run terminates,
    /// within [0, 1]
    pub min_coverage: f64,

    /// Movement strategy
    pub strategy: RobotStrategy,

    /// RNG seed for deterministic obstacle placement and movement
    pub rng_seed: u64,
}

impl RobotConfig {
    /// Validate the configuration, fail-fast before any state is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyRoom {
                width: self.width,
                height: self.height,
            });
        }
        if self.num_obstacles > self.width * self.height {
            return Err(ConfigError::TooManyObstacles {
                requested: self.num_obstacles,
                tiles: self.width * self.height,
            });
        }
        if self.velocity <= 0.0 {
            return Err(ConfigError::NonPositiveVelocity {
                velocity: self.velocity,
            });
        }
        if !(0.0..=1.0).contains(&self.min_coverage) {
            return Err(ConfigError::InvalidCoverage {
                min_coverage: self.min_coverage,
            });
        }
        Ok(())
    }
}

/// Outcome of one coverage run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRunResult {
    /// Steps taken before the coverage target or the cap
    pub steps: usize,

    /// Fraction of empty tiles cleaned when the run ended
    pub coverage: f64,

    /// False when the step cap ended the run; such a trial is excluded
    /// from aggregate statistics by the caller
    pub converged: bool,
}

/// Engine driving one cleaning run
///
/// Owns the room, the robot, the RNG, and the event log. `reset`
/// regenerates all randomized state (fresh obstacle placement, fresh
/// spawn heading); an environment is never reused across trials without
/// regeneration.
pub struct CoverageEngine {
    config: RobotConfig,
    room: Room,
    robot: Robot,
    rng: RngManager,
    event_log: EventLog,
}

impl CoverageEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration is invalid
    /// (empty room, too many obstacles, non-positive velocity,
    /// coverage outside [0, 1]).
    pub fn new(config: RobotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = RngManager::new(config.rng_seed);
        let mut room = Room::generate(config.width, config.height, config.num_obstacles, &mut rng)?;
        let robot = Robot::new(config.strategy, &mut room, config.velocity, &mut rng)?;

        Ok(Self {
            config,
            room,
            robot,
            rng,
            event_log: EventLog::new(),
        })
    }

    /// Reset to a fresh initial state with new obstacle placement
    ///
    /// The RNG stream continues from where the previous run left it, so
    /// successive resets produce independent rooms while the whole
    /// sequence stays reproducible from the configured seed.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.room = Room::generate(
            self.config.width,
            self.config.height,
            self.config.num_obstacles,
            &mut self.rng,
        )?;
        self.robot = Robot::new(
            self.config.strategy,
            &mut self.room,
            self.config.velocity,
            &mut self.rng,
        )?;
        self.event_log.clear();
        Ok(())
    }

    /// Get the room (cleaned/obstacle sets for rendering)
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Get the robot (position and heading for rendering)
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Get the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Tiles that must be cleaned before the run terminates
    fn coverage_target(&self) -> f64 {
        self.config.min_coverage * self.room.num_empty_tiles() as f64
    }

    /// Run the simulation to completion and return its summary
    ///
    /// Steps until the cleaned-tile count reaches the coverage target,
    /// bounded by the 10,000-step safety cap. A capped run reports
    /// `converged: false` and is treated as a failed trial by the batch
    /// layer, not as an error.
    pub fn run(&mut self) -> CoverageRunResult {
        let mut steps = StepCounter::new(MAX_STEPS);
        let target = self.coverage_target();

        while (self.room.num_cleaned_tiles() as f64) < target && !steps.is_exhausted() {
            self.robot.update_position_and_clean(
                &mut self.room,
                &mut self.rng,
                &mut self.event_log,
                steps.current_step(),
            );
            steps.advance();
        }

        let empty = self.room.num_empty_tiles();
        let coverage = if empty > 0 {
            self.room.num_cleaned_tiles() as f64 / empty as f64
        } else {
            1.0
        };

        CoverageRunResult {
            steps: steps.current_step(),
            coverage,
            converged: !steps.is_exhausted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> RobotConfig {
        RobotConfig {
            width: 5,
            height: 5,
            num_obstacles: 5,
            velocity: 1.0,
            min_coverage: 0.8,
            strategy: RobotStrategy::Standard,
            rng_seed: 12345,
        }
    }

    #[test]
    fn test_invalid_configs_fail_fast() {
        let mut config = base_config();
        config.velocity = -1.0;
        assert_eq!(
            CoverageEngine::new(config).err(),
            Some(ConfigError::NonPositiveVelocity { velocity: -1.0 })
        );

        let mut config = base_config();
        config.num_obstacles = 26;
        assert_eq!(
            CoverageEngine::new(config).err(),
            Some(ConfigError::TooManyObstacles {
                requested: 26,
                tiles: 25
            })
        );

        let mut config = base_config();
        config.min_coverage = 1.5;
        assert_eq!(
            CoverageEngine::new(config).err(),
            Some(ConfigError::InvalidCoverage { min_coverage: 1.5 })
        );
    }

    #[test]
    fn test_zero_coverage_terminates_immediately() {
        let mut config = base_config();
        config.min_coverage = 0.0;

        let mut engine = CoverageEngine::new(config).unwrap();
        let result = engine.run();
        assert_eq!(result.steps, 0);
        assert!(result.converged);
    }

    #[test]
    fn test_run_is_deterministic_for_a_seed() {
        let mut engine1 = CoverageEngine::new(base_config()).unwrap();
        let mut engine2 = CoverageEngine::new(base_config()).unwrap();

        assert_eq!(engine1.run(), engine2.run());
    }

    #[test]
    fn test_reset_regenerates_room() {
        let mut engine = CoverageEngine::new(base_config()).unwrap();
        let before: Vec<_> = {
            let mut v: Vec<_> = engine.room().obstacles().iter().copied().collect();
            v.sort_unstable();
            v
        };

        engine.run();
        engine.reset().unwrap();

        let after: Vec<_> = {
            let mut v: Vec<_> = engine.room().obstacles().iter().copied().collect();
            v.sort_unstable();
            v
        };

        // 5 obstacles over 25 tiles: an identical layout after reset
        // would mean the reset reused stale state.
        assert_ne!(before, after);
        assert!(engine.room().num_cleaned_tiles() <= 1);
    }
}
