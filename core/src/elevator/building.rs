//! Building model
//!
//! The Building owns the passenger list for one run and answers
//! floor-occupancy queries. It is a query facade: apart from handing out
//! mutable access to its passengers for the engine's pickup/dropoff phase,
//! it has no behavior of its own.
//!
//! Single ownership of the passenger list is deliberate — the source this
//! design descends from shared one mutable list between building and
//! elevator (and across instances via a default argument); here the
//! building is the only owner and everything else borrows.

use crate::elevator::passenger::Passenger;
use serde::{Deserialize, Serialize};

/// Represents the building served by the elevator
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::elevator::{Building, Passenger};
///
/// let passengers = vec![
///     Passenger::with_journey(1, 3, 0),
///     Passenger::with_journey(2, 3, 1),
///     Passenger::with_journey(3, 2, 0),
/// ];
/// let building = Building::new(5, passengers);
///
/// assert_eq!(building.passengers_on_floor(3), 2);
/// assert!(!building.all_served());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Number of floors, indexed 0 to num_floors - 1
    num_floors: usize,

    /// All passengers for this run (the elevator's request list)
    passengers: Vec<Passenger>,
}

impl Building {
    /// Create a building with the given floor count and passenger list
    pub fn new(num_floors: usize, passengers: Vec<Passenger>) -> Self {
        Self {
            num_floors,
            passengers,
        }
    }

    /// Get the number of floors
    pub fn num_floors(&self) -> usize {
        self.num_floors
    }

    /// Count of passengers currently waiting (not in the elevator, not
    /// served) whose origin is `floor`
    pub fn passengers_on_floor(&self, floor: usize) -> usize {
        self.passengers
            .iter()
            .filter(|p| !p.in_elevator() && !p.at_destination() && p.origin() == floor)
            .count()
    }

    /// Have all passengers been delivered
    pub fn all_served(&self) -> bool {
        self.passengers.iter().all(|p| p.at_destination())
    }

    /// Number of passengers delivered so far
    pub fn served_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.at_destination()).count()
    }

    /// Total number of passengers in this run
    pub fn num_passengers(&self) -> usize {
        self.passengers.len()
    }

    /// Get the passenger list
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Get mutable access to the passenger list (engine pickup/dropoff)
    pub fn passengers_mut(&mut self) -> &mut [Passenger] {
        &mut self.passengers
    }
}
