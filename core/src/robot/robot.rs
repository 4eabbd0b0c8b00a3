//! Robot model and movement strategies
//!
//! The robot is one struct; the three movement strategies are variants of
//! `RobotStrategy`, dispatched by a `match` inside
//! `update_position_and_clean`. Auxiliary state used by only one strategy
//! (the wall-following blocked flag, visited-tile history, stagnation
//! counter) lives on the robot and stays idle under the other strategies.
//!
//! # Strategies
//!
//! - **Standard**: move straight; on hitting a wall or obstacle, pick a
//!   new random heading and stay in place for the step.
//! - **WallFollowing**: sidestep obstacles with a +90 degree turn, restore
//!   the original course with -90 after passing; a stagnation counter
//!   breaks the two-tile loops this can fall into.
//! - **RandomWalk**: draw random headings until one yields a valid move,
//!   then take it.

use crate::errors::ConfigError;
use crate::events::{Event, EventLog, HeadingChangeReason};
use crate::rng::RngManager;
use crate::robot::position::Position;
use crate::robot::room::Room;
use serde::{Deserialize, Serialize};

/// Movement strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotStrategy {
    /// Straight-line movement, random re-aim when blocked
    Standard,
    /// 90-degree sidesteps around obstacles
    WallFollowing,
    /// Fresh random heading every step
    RandomWalk,
}

/// Consecutive same-tile visits tolerated before WallFollowing breaks out
/// with a random heading
const STAGNATION_LIMIT: u32 = 10;

/// Bound on RandomWalk heading redraws per step; on exhaustion the robot
/// stays in place (a fully-walled position must still terminate)
const MAX_HEADING_ATTEMPTS: u32 = 1_000;

/// Represents a robot cleaning a particular room
///
/// At all times the robot has a position, an integer heading in degrees,
/// and a fixed velocity. It is created bound to one room, at the room's
/// center tile, and cleans the tile it spawns on.
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::robot::{Robot, RobotStrategy, Room};
/// use mobility_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(42);
/// let mut room = Room::generate(5, 5, 0, &mut rng).unwrap();
/// let robot = Robot::new(RobotStrategy::Standard, &mut room, 1.0, &mut rng).unwrap();
///
/// assert_eq!(robot.position().tile(), (2, 2));
/// assert_eq!(room.num_cleaned_tiles(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    /// Movement strategy
    strategy: RobotStrategy,

    /// Continuous position in the room
    position: Position,

    /// Heading in degrees. WallFollowing's +/-90 adjustments may take it
    /// outside [0, 360); sin/cos are total so it is not normalized.
    heading_degrees: i32,

    /// Distance per step
    velocity: f64,

    /// WallFollowing: was the robot turned away from an obstacle last step
    past_obstacle: bool,

    /// WallFollowing: distinct tiles visited, in order
    visited_tiles: Vec<(i64, i64)>,

    /// WallFollowing: consecutive steps spent on the last distinct tile
    stagnation: u32,
}

impl Robot {
    /// Create a robot at the room's center tile with a random heading.
    /// Cleans the spawn tile (refused by the room if the center holds an
    /// obstacle).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveVelocity` when `velocity <= 0`.
    pub fn new(
        strategy: RobotStrategy,
        room: &mut Room,
        velocity: f64,
        rng: &mut RngManager,
    ) -> Result<Self, ConfigError> {
        if velocity <= 0.0 {
            return Err(ConfigError::NonPositiveVelocity { velocity });
        }

        let (cx, cy) = room.center();
        let position = Position::new(cx as f64, cy as f64);
        room.clean_tile_at_position(position);

        Ok(Self {
            strategy,
            position,
            heading_degrees: rng.heading_degrees(),
            velocity,
            past_obstacle: false,
            visited_tiles: Vec::new(),
            stagnation: 0,
        })
    }

    /// Get the movement strategy
    pub fn strategy(&self) -> RobotStrategy {
        self.strategy
    }

    /// Get the current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the current heading in degrees
    pub fn heading_degrees(&self) -> i32 {
        self.heading_degrees
    }

    /// Get the velocity
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Distinct tiles visited by the WallFollowing strategy, in order
    pub fn visited_tiles(&self) -> &[(i64, i64)] {
        &self.visited_tiles
    }

    /// The position one step ahead along the current heading
    fn candidate(&self) -> Position {
        self.position.step(self.heading_degrees as f64, self.velocity)
    }

    /// Simulate the passage of a single step: move (or re-aim) according
    /// to the strategy and mark the destination tile cleaned on a move.
    pub fn update_position_and_clean(
        &mut self,
        room: &mut Room,
        rng: &mut RngManager,
        log: &mut EventLog,
        step: usize,
    ) {
        match self.strategy {
            RobotStrategy::Standard => self.step_standard(room, rng, log, step),
            RobotStrategy::WallFollowing => self.step_wall_following(room, rng, log, step),
            RobotStrategy::RandomWalk => self.step_random_walk(room, rng, log, step),
        }
    }

    /// Standard: blocked (obstacle or wall) means re-aim and stand still
    fn step_standard(
        &mut self,
        room: &mut Room,
        rng: &mut RngManager,
        log: &mut EventLog,
        step: usize,
    ) {
        let candidate = self.candidate();

        if room.is_obstacle(candidate) || !room.is_position_in_room(candidate) {
            let reason = if room.is_obstacle(candidate) {
                HeadingChangeReason::HitObstacle
            } else {
                HeadingChangeReason::HitWall
            };
            self.heading_degrees = rng.heading_degrees();
            log.log(Event::HeadingChanged {
                step,
                heading_degrees: self.heading_degrees,
                reason,
            });
        } else {
            self.move_to(candidate, room, log, step);
        }
    }

    /// WallFollowing: +90 past an obstacle, -90 once clear, stagnation
    /// counter breaks deadlock loops
    fn step_wall_following(
        &mut self,
        room: &mut Room,
        rng: &mut RngManager,
        log: &mut EventLog,
        step: usize,
    ) {
        let candidate = self.candidate();

        if room.is_obstacle(candidate) {
            self.heading_degrees += 90;
            self.past_obstacle = true;
            log.log(Event::HeadingChanged {
                step,
                heading_degrees: self.heading_degrees,
                reason: HeadingChangeReason::HitObstacle,
            });
        } else if !room.is_position_in_room(candidate) {
            // A wall is not an obstacle: re-aim randomly, keep the
            // blocked flag as-is for the eventual valid move.
            self.heading_degrees = rng.heading_degrees();
            log.log(Event::HeadingChanged {
                step,
                heading_degrees: self.heading_degrees,
                reason: HeadingChangeReason::HitWall,
            });
        } else {
            if self.past_obstacle {
                // Undo the sidestep turn: the move itself used the +90
                // heading, subsequent steps resume the original course.
                self.heading_degrees -= 90;
            }
            self.move_to(candidate, room, log, step);
            self.past_obstacle = false;

            let tile = self.position.tile();
            match self.visited_tiles.last() {
                Some(&last) if last == tile => self.stagnation += 1,
                _ => self.visited_tiles.push(tile),
            }

            if self.stagnation > STAGNATION_LIMIT {
                self.heading_degrees = rng.heading_degrees();
                self.stagnation = 0;
                log.log(Event::HeadingChanged {
                    step,
                    heading_degrees: self.heading_degrees,
                    reason: HeadingChangeReason::DeadlockBreak,
                });
            }
        }
    }

    /// RandomWalk: rejection-sample a heading whose step is valid
    fn step_random_walk(
        &mut self,
        room: &mut Room,
        rng: &mut RngManager,
        log: &mut EventLog,
        step: usize,
    ) {
        self.heading_degrees = rng.heading_degrees();

        let mut attempts = 0;
        loop {
            let candidate = self.candidate();
            if room.is_position_in_room(candidate) && !room.is_obstacle(candidate) {
                self.move_to(candidate, room, log, step);
                return;
            }

            attempts += 1;
            if attempts >= MAX_HEADING_ATTEMPTS {
                // Every sampled heading was blocked; stand still this step.
                return;
            }
            self.heading_degrees = rng.heading_degrees();
        }
    }

    /// Accept the candidate position and clean the destination tile
    fn move_to(&mut self, destination: Position, room: &mut Room, log: &mut EventLog, step: usize) {
        let from = (self.position.x(), self.position.y());
        self.position = destination;
        log.log(Event::RobotMoved {
            step,
            from,
            to: (destination.x(), destination.y()),
            heading_degrees: self.heading_degrees,
        });

        if room.clean_tile_at_position(destination) {
            let (x, y) = destination.tile();
            log.log(Event::TileCleaned { step, x, y });
        }
    }
}
