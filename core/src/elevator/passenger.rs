//! Passenger model
//!
//! Represents a passenger requesting an elevator journey. Each passenger
//! has:
//! - A unique id (sequential within one run)
//! - An origin and destination floor (origin != destination, guaranteed)
//! - Two lifecycle booleans forming a strict 3-state machine
//!
//! # Lifecycle
//!
//! ```text
//! Waiting (in_elevator=false, at_destination=false)
//!   -> Riding  (in_elevator=true,  at_destination=false)   via board()
//!   -> Served  (in_elevator=false, at_destination=true)    via disembark_at_destination()
//! ```
//!
//! Transitions are one-directional; no passenger re-enters Waiting after
//! being Served.

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during journey assignment
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JourneyError {
    #[error("No valid journey exists in a building with {num_floors} floor(s)")]
    NoValidJourney { num_floors: usize },
}

/// Derived lifecycle state of a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerState {
    /// Waiting on the origin floor
    Waiting,
    /// Inside the elevator
    Riding,
    /// Delivered to the destination floor
    Served,
}

/// Bound on destination redraws before the deterministic fallback kicks in.
/// With num_floors >= 2 the redraw succeeds almost surely long before this.
const MAX_JOURNEY_REDRAWS: usize = 64;

/// Probability that an endpoint of a journey is the lobby (floor 0)
const LOBBY_BIAS: f64 = 0.5;

/// Represents a passenger in the elevator simulation
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::elevator::{Passenger, PassengerState};
/// use mobility_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(42);
/// let passenger = Passenger::new(1, 10, &mut rng).unwrap();
///
/// assert_ne!(passenger.origin(), passenger.destination());
/// assert_eq!(passenger.state(), PassengerState::Waiting);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique passenger identifier within one run
    id: usize,

    /// Floor the passenger starts from
    origin: usize,

    /// Floor the passenger wants to reach
    destination: usize,

    /// Is the passenger currently inside the elevator
    in_elevator: bool,

    /// Has the passenger been delivered to its destination
    at_destination: bool,
}

impl Passenger {
    /// Create a passenger with a randomly assigned journey
    ///
    /// Origin and destination are each drawn independently: 50% floor 0
    /// (the lobby), otherwise uniform over floors 1..num_floors-1. The
    /// destination is redrawn while it collides with the origin.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::NoValidJourney` when `num_floors < 2` —
    /// a 1-floor building admits no origin != destination pair.
    pub fn new(id: usize, num_floors: usize, rng: &mut RngManager) -> Result<Self, JourneyError> {
        let (origin, destination) = Self::assign_journey(num_floors, rng)?;
        Ok(Self {
            id,
            origin,
            destination,
            in_elevator: false,
            at_destination: false,
        })
    }

    /// Create a passenger with a fixed journey (for deterministic scenarios)
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::elevator::Passenger;
    ///
    /// let passenger = Passenger::with_journey(1, 3, 0);
    /// assert_eq!(passenger.origin(), 3);
    /// assert_eq!(passenger.destination(), 0);
    /// ```
    pub fn with_journey(id: usize, origin: usize, destination: usize) -> Self {
        assert_ne!(origin, destination, "origin must differ from destination");
        Self {
            id,
            origin,
            destination,
            in_elevator: false,
            at_destination: false,
        }
    }

    /// Draw an (origin, destination) pair, biased 50% toward the lobby
    ///
    /// The redraw loop is bounded; after `MAX_JOURNEY_REDRAWS` collisions
    /// the destination falls back to the next distinct floor.
    fn assign_journey(
        num_floors: usize,
        rng: &mut RngManager,
    ) -> Result<(usize, usize), JourneyError> {
        if num_floors < 2 {
            return Err(JourneyError::NoValidJourney { num_floors });
        }

        let origin = Self::draw_endpoint(num_floors, rng);
        let mut destination = Self::draw_endpoint(num_floors, rng);

        let mut redraws = 0;
        while destination == origin {
            if redraws >= MAX_JOURNEY_REDRAWS {
                destination = (origin + 1) % num_floors;
                break;
            }
            destination = Self::draw_endpoint(num_floors, rng);
            redraws += 1;
        }

        Ok((origin, destination))
    }

    /// Draw one journey endpoint: lobby with probability 0.5, else uniform
    /// over the upper floors
    fn draw_endpoint(num_floors: usize, rng: &mut RngManager) -> usize {
        if rng.chance(LOBBY_BIAS) {
            0
        } else {
            rng.range(1, num_floors as i64) as usize
        }
    }

    /// Get passenger ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get origin floor
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Get destination floor
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Is the passenger currently inside the elevator
    pub fn in_elevator(&self) -> bool {
        self.in_elevator
    }

    /// Has the passenger been delivered
    pub fn at_destination(&self) -> bool {
        self.at_destination
    }

    /// The floor this passenger currently needs the elevator at:
    /// destination if riding, origin if still waiting, None once served.
    pub fn floor_of_interest(&self) -> Option<usize> {
        if self.at_destination {
            None
        } else if self.in_elevator {
            Some(self.destination)
        } else {
            Some(self.origin)
        }
    }

    /// Derived lifecycle state
    pub fn state(&self) -> PassengerState {
        match (self.in_elevator, self.at_destination) {
            (false, false) => PassengerState::Waiting,
            (true, false) => PassengerState::Riding,
            (_, true) => PassengerState::Served,
        }
    }

    /// Transition Waiting -> Riding
    ///
    /// # Panics
    /// Panics if the passenger is not Waiting (the engine only boards
    /// waiting passengers; a double board is a logic error).
    pub fn board(&mut self) {
        assert_eq!(
            self.state(),
            PassengerState::Waiting,
            "only a waiting passenger can board"
        );
        self.in_elevator = true;
    }

    /// Transition Riding -> Served
    ///
    /// # Panics
    /// Panics if the passenger is not Riding.
    pub fn disembark_at_destination(&mut self) {
        assert_eq!(
            self.state(),
            PassengerState::Riding,
            "only a riding passenger can disembark"
        );
        self.in_elevator = false;
        self.at_destination = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_endpoints_distinct() {
        let mut rng = RngManager::new(42);

        for id in 0..500 {
            let p = Passenger::new(id, 8, &mut rng).unwrap();
            assert_ne!(p.origin(), p.destination());
            assert!(p.origin() < 8);
            assert!(p.destination() < 8);
        }
    }

    #[test]
    fn test_one_floor_building_is_an_error() {
        let mut rng = RngManager::new(42);

        let err = Passenger::new(1, 1, &mut rng).unwrap_err();
        assert_eq!(err, JourneyError::NoValidJourney { num_floors: 1 });
    }

    #[test]
    fn test_two_floor_building_always_valid() {
        let mut rng = RngManager::new(7);

        for id in 0..100 {
            let p = Passenger::new(id, 2, &mut rng).unwrap();
            assert_ne!(p.origin(), p.destination());
        }
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut p = Passenger::with_journey(1, 3, 0);
        assert_eq!(p.state(), PassengerState::Waiting);
        assert_eq!(p.floor_of_interest(), Some(3));

        p.board();
        assert_eq!(p.state(), PassengerState::Riding);
        assert_eq!(p.floor_of_interest(), Some(0));

        p.disembark_at_destination();
        assert_eq!(p.state(), PassengerState::Served);
        assert_eq!(p.floor_of_interest(), None);
    }

    #[test]
    #[should_panic(expected = "only a waiting passenger can board")]
    fn test_double_board_panics() {
        let mut p = Passenger::with_journey(1, 3, 0);
        p.board();
        p.board();
    }
}
