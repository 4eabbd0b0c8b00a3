//! Mobility Strategy Simulator - Rust Engine
//!
//! Two independent discrete-time simulations with deterministic execution:
//! an elevator serving passengers under competing dispatch strategies, and
//! a robot cleaning a grid room under competing movement strategies.
//!
//! # Architecture
//!
//! - **core**: Logical time (step counter + safety cap)
//! - **rng**: Deterministic random number generation
//! - **events**: Per-step event log (the rendering collaborator's feed)
//! - **elevator**: Building, passengers, dispatch strategies, engine
//! - **robot**: Room, position, movement strategies, engine
//! - **trials**: Trial batches and parameter sweeps
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG); same seed + same
//!    config → identical run
//! 2. Each trial owns an independent environment, agent, and RNG;
//!    nothing is shared across trials
//! 3. Non-convergence (the 10,000-step cap) is a defined trial outcome,
//!    filtered by the trial layer — never an error

// Module declarations
pub mod core;
pub mod elevator;
pub mod errors;
pub mod events;
pub mod rng;
pub mod robot;
pub mod trials;

// Re-exports for convenience
pub use crate::core::time::{StepCounter, MAX_STEPS};
pub use crate::elevator::{
    Building, Direction, Elevator, ElevatorConfig, ElevatorKind, ElevatorRunResult, JourneyError,
    Passenger, PassengerState, SimulationEngine, STOP_TIME, TIME_PER_FLOOR,
};
pub use crate::errors::ConfigError;
pub use crate::events::{Event, EventLog, HeadingChangeReason};
pub use crate::rng::RngManager;
pub use crate::robot::{
    CoverageEngine, CoverageRunResult, Position, Robot, RobotConfig, RobotStrategy, Room,
};
pub use crate::trials::{SweepPoint, SweepReport, TrialStats};
