//! Elevator simulation
//!
//! An elevator serves randomly generated passenger journeys across the
//! floors of a building under one of two dispatch strategies:
//!
//! - **Shabbat**: fixed sweep, ignores requests, one floor per step
//! - **Ordinary**: demand-responsive, jumps to the nearest floor of interest
//!
//! The engine drives pickup/dropoff and movement step by step, accruing an
//! aggregate person-time wait metric used to compare the strategies.

pub mod building;
pub mod elevator;
pub mod engine;
pub mod passenger;

pub use building::Building;
pub use elevator::{Direction, Elevator, ElevatorKind};
pub use engine::{ElevatorConfig, ElevatorRunResult, SimulationEngine, STOP_TIME, TIME_PER_FLOOR};
pub use passenger::{JourneyError, Passenger, PassengerState};
