//! Robot cleaning simulation
//!
//! A robot cleans a bounded grid room containing obstacles under one of
//! three movement strategies:
//!
//! - **Standard**: straight lines, random re-aim when blocked
//! - **WallFollowing**: 90-degree sidesteps around obstacles
//! - **RandomWalk**: fresh random heading every step
//!
//! The engine steps the strategy until a requested fraction of the empty
//! tiles is cleaned, producing the steps-to-coverage metric used to
//! compare the strategies.

pub mod engine;
pub mod position;
pub mod robot;
pub mod room;

pub use engine::{CoverageEngine, CoverageRunResult, RobotConfig};
pub use position::Position;
pub use robot::{Robot, RobotStrategy};
pub use room::Room;
