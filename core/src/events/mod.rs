//! Event logging for simulation replay and analysis.
//!
//! This module defines the Event enum which captures all significant state
//! changes during a run. Events enable:
//! - Rendering (the animation collaborator consumes the per-step stream)
//! - Debugging (understand what happened and when)
//! - Testing (assert on exact movement sequences)
//!
//! Engines only write to the log; nothing in the core reads it back to make
//! decisions.
//!
//! # Example
//!
//! ```rust
//! use mobility_simulator_core_rs::events::Event;
//!
//! let event = Event::ElevatorMoved {
//!     step: 3,
//!     from_floor: 0,
//!     to_floor: 4,
//!     floors_traversed: 4,
//! };
//!
//! assert_eq!(event.step(), 3);
//! ```

/// Simulation event capturing a state change.
///
/// All events include a step number for temporal ordering. Events are
/// logged in the order they occur within a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Elevator moved (possibly several floors at once for Ordinary dispatch)
    ElevatorMoved {
        step: usize,
        from_floor: usize,
        to_floor: usize,
        floors_traversed: usize,
    },

    /// Waiting passenger boarded the elevator at its current floor
    PassengerPickedUp {
        step: usize,
        passenger_id: usize,
        floor: usize,
    },

    /// Riding passenger reached its destination floor
    PassengerDroppedOff {
        step: usize,
        passenger_id: usize,
        floor: usize,
    },

    /// Robot moved to a new position
    RobotMoved {
        step: usize,
        from: (f64, f64),
        to: (f64, f64),
        heading_degrees: i32,
    },

    /// A tile was marked cleaned for the first time
    TileCleaned { step: usize, x: i64, y: i64 },

    /// Robot changed heading without moving (wall, obstacle, or deadlock break)
    HeadingChanged {
        step: usize,
        heading_degrees: i32,
        reason: HeadingChangeReason,
    },
}

/// Why a robot changed heading without moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingChangeReason {
    /// Candidate position left the room bounds
    HitWall,
    /// Candidate position landed on an obstacle tile
    HitObstacle,
    /// Stagnation counter tripped (WallFollowing deadlock break)
    DeadlockBreak,
}

impl Event {
    /// Get the step number of this event
    pub fn step(&self) -> usize {
        match self {
            Event::ElevatorMoved { step, .. } => *step,
            Event::PassengerPickedUp { step, .. } => *step,
            Event::PassengerDroppedOff { step, .. } => *step,
            Event::RobotMoved { step, .. } => *step,
            Event::TileCleaned { step, .. } => *step,
            Event::HeadingChanged { step, .. } => *step,
        }
    }

    /// Get a short type name for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ElevatorMoved { .. } => "ElevatorMoved",
            Event::PassengerPickedUp { .. } => "PassengerPickedUp",
            Event::PassengerDroppedOff { .. } => "PassengerDroppedOff",
            Event::RobotMoved { .. } => "RobotMoved",
            Event::TileCleaned { .. } => "TileCleaned",
            Event::HeadingChanged { .. } => "HeadingChanged",
        }
    }

    /// Get passenger ID if the event relates to a specific passenger
    pub fn passenger_id(&self) -> Option<usize> {
        match self {
            Event::PassengerPickedUp { passenger_id, .. } => Some(*passenger_id),
            Event::PassengerDroppedOff { passenger_id, .. } => Some(*passenger_id),
            _ => None,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific step
    pub fn events_at_step(&self, step: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.step() == step).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific passenger
    pub fn events_for_passenger(&self, passenger_id: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.passenger_id() == Some(passenger_id))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
