//! Elevator model and dispatch strategies
//!
//! The elevator is one struct; the two dispatch strategies are variants of
//! `ElevatorKind`, resolved by a `match` inside `move_once`. No inheritance,
//! no factory type — construction takes the kind.
//!
//! # Strategies
//!
//! - **Shabbat**: fixed sweep. Ignores requests entirely, reverses at the
//!   terminal floors, always moves exactly one floor per step.
//! - **Ordinary**: demand-responsive. Jumps directly to the nearest floor
//!   of interest in the direction of travel, flipping direction when that
//!   side is empty. May traverse several floors in one step.

use crate::elevator::passenger::Passenger;
use serde::{Deserialize, Serialize};

/// Direction of elevator travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Dispatch strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevatorKind {
    /// Fixed sweep: bottom to top and back, one floor per step
    Shabbat,
    /// Demand-responsive: jump to the nearest floor of interest
    Ordinary,
}

/// Represents the elevator in the simulation
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::elevator::{Elevator, ElevatorKind, Direction};
///
/// let elevator = Elevator::new(ElevatorKind::Shabbat, 5, 4);
/// assert_eq!(elevator.current_floor(), 0);
/// assert_eq!(elevator.direction(), Direction::Up);
/// assert_eq!(elevator.occupants(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elevator {
    /// Dispatch strategy
    kind: ElevatorKind,

    /// Number of floors in the building, indexed 0 to num_floors - 1
    num_floors: usize,

    /// Maximum number of passengers carried at once
    capacity: usize,

    /// Floor the elevator is currently on
    current_floor: usize,

    /// Current direction of travel
    direction: Direction,

    /// Number of passengers currently inside
    occupants: usize,
}

impl Elevator {
    /// Create a new elevator at floor 0, heading up, empty
    pub fn new(kind: ElevatorKind, num_floors: usize, capacity: usize) -> Self {
        Self {
            kind,
            num_floors,
            capacity,
            current_floor: 0,
            direction: Direction::Up,
            occupants: 0,
        }
    }

    /// Get the dispatch strategy
    pub fn kind(&self) -> ElevatorKind {
        self.kind
    }

    /// Get the current floor
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    /// Get the current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the number of passengers inside
    pub fn occupants(&self) -> usize {
        self.occupants
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Is there room for another passenger
    pub fn has_room(&self) -> bool {
        self.occupants < self.capacity
    }

    /// A passenger stepped in (engine checked floor and capacity first)
    pub fn board_passenger(&mut self) {
        assert!(self.has_room(), "boarding past capacity");
        self.occupants += 1;
    }

    /// A passenger stepped out at its destination
    pub fn discharge_passenger(&mut self) {
        assert!(self.occupants > 0, "discharge from an empty elevator");
        self.occupants -= 1;
    }

    /// Advance the elevator one step and return the number of floors
    /// traversed.
    ///
    /// The passenger slice is the run's full request list; Shabbat ignores
    /// it, Ordinary derives its routing from it. Pickups and dropoffs on
    /// the current floor are handled by the engine before this is called,
    /// which is why the routing search uses strict inequalities.
    pub fn move_once(&mut self, passengers: &[Passenger]) -> usize {
        match self.kind {
            ElevatorKind::Shabbat => self.move_shabbat(),
            ElevatorKind::Ordinary => self.move_ordinary(passengers),
        }
    }

    /// Fixed sweep: reverse at the terminal floors, move one floor
    fn move_shabbat(&mut self) -> usize {
        if self.current_floor == 0 {
            self.direction = Direction::Up;
        } else if self.current_floor == self.num_floors - 1 {
            self.direction = Direction::Down;
        }

        match self.direction {
            Direction::Up => self.current_floor += 1,
            Direction::Down => self.current_floor -= 1,
        }

        1
    }

    /// Demand-responsive: jump to the nearest floor of interest in the
    /// direction of travel, flipping direction when that side is empty.
    ///
    /// When neither side holds a floor of interest the elevator stays put
    /// and returns 0. With capacity >= 1 that case is unreachable (the
    /// engine's pickup/dropoff pass always leaves an off-floor request),
    /// but it is defined rather than left to a sentinel.
    fn move_ordinary(&mut self, passengers: &[Passenger]) -> usize {
        let mut closest_up: Option<usize> = None;
        let mut closest_down: Option<usize> = None;

        for passenger in passengers {
            let floor = match passenger.floor_of_interest() {
                Some(floor) => floor,
                None => continue, // already served
            };

            if floor > self.current_floor {
                closest_up = Some(closest_up.map_or(floor, |up| up.min(floor)));
            } else if floor < self.current_floor {
                closest_down = Some(closest_down.map_or(floor, |down| down.max(floor)));
            }
        }

        let prev_floor = self.current_floor;

        match self.direction {
            Direction::Up => {
                if let Some(up) = closest_up {
                    self.current_floor = up;
                } else if let Some(down) = closest_down {
                    self.direction = Direction::Down;
                    self.current_floor = down;
                }
            }
            Direction::Down => {
                if let Some(down) = closest_down {
                    self.current_floor = down;
                } else if let Some(up) = closest_up {
                    self.direction = Direction::Up;
                    self.current_floor = up;
                }
            }
        }

        prev_floor.abs_diff(self.current_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shabbat_full_sweep() {
        let mut elevator = Elevator::new(ElevatorKind::Shabbat, 5, 4);
        let passengers: Vec<Passenger> = Vec::new();

        let mut floors = vec![elevator.current_floor()];
        for _ in 0..9 {
            let moved = elevator.move_once(&passengers);
            assert_eq!(moved, 1);
            floors.push(elevator.current_floor());
        }

        assert_eq!(floors, vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1]);
    }

    #[test]
    fn test_ordinary_jumps_to_closest_up() {
        let mut elevator = Elevator::new(ElevatorKind::Ordinary, 10, 4);
        let passengers = vec![
            Passenger::with_journey(1, 7, 0),
            Passenger::with_journey(2, 3, 9),
        ];

        // Moving up from 0: floor 3 is closer than floor 7
        let moved = elevator.move_once(&passengers);
        assert_eq!(moved, 3);
        assert_eq!(elevator.current_floor(), 3);
        assert_eq!(elevator.direction(), Direction::Up);
    }

    #[test]
    fn test_ordinary_flips_when_no_request_above() {
        let mut elevator = Elevator::new(ElevatorKind::Ordinary, 10, 4);
        let mut passengers = vec![Passenger::with_journey(1, 7, 2)];

        // First move: up to the pickup floor
        elevator.move_once(&passengers);
        assert_eq!(elevator.current_floor(), 7);

        // Board; only interest is now floor 2, below
        passengers[0].board();
        elevator.board_passenger();

        let moved = elevator.move_once(&passengers);
        assert_eq!(moved, 5);
        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(elevator.direction(), Direction::Down);
    }

    #[test]
    fn test_ordinary_ignores_request_on_current_floor() {
        let mut elevator = Elevator::new(ElevatorKind::Ordinary, 5, 4);
        let passengers = vec![
            Passenger::with_journey(1, 0, 4), // on the elevator's floor
            Passenger::with_journey(2, 2, 0),
        ];

        // The floor-0 request is excluded by the strict inequality; the
        // elevator routes to floor 2.
        let moved = elevator.move_once(&passengers);
        assert_eq!(moved, 2);
        assert_eq!(elevator.current_floor(), 2);
    }

    #[test]
    fn test_ordinary_no_interest_stays_put() {
        let mut elevator = Elevator::new(ElevatorKind::Ordinary, 5, 4);

        // No outstanding requests on either side: stay put, zero traversal.
        let moved = elevator.move_once(&[]);
        assert_eq!(moved, 0);
        assert_eq!(elevator.current_floor(), 0);
    }

    #[test]
    #[should_panic(expected = "boarding past capacity")]
    fn test_board_past_capacity_panics() {
        let mut elevator = Elevator::new(ElevatorKind::Ordinary, 5, 1);
        elevator.board_passenger();
        elevator.board_passenger();
    }
}
