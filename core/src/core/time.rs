//! Time management for the simulations
//!
//! Both simulations operate in discrete steps. "Time" is a logical step
//! counter, never wall-clock; any real-time pacing belongs to the excluded
//! visualization layer. The counter also carries the safety cap that bounds
//! non-converging runs.

use serde::{Deserialize, Serialize};

/// Number of steps after which a run is declared non-converging.
///
/// A run hitting the cap is a defined trial outcome (excluded from
/// aggregate statistics by the trial layer), not an error.
pub const MAX_STEPS: usize = 10_000;

/// Logical step counter with a safety cap
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::core::time::StepCounter;
///
/// let mut steps = StepCounter::new(10_000);
/// assert_eq!(steps.current_step(), 0);
///
/// steps.advance();
/// assert_eq!(steps.current_step(), 1);
/// assert!(!steps.is_exhausted());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCounter {
    /// Total steps elapsed since the run started
    current_step: usize,
    /// Cap after which the run is declared non-converging
    max_steps: usize,
}

impl StepCounter {
    /// Create a new StepCounter
    ///
    /// # Arguments
    /// * `max_steps` - Safety cap for the run
    pub fn new(max_steps: usize) -> Self {
        assert!(max_steps > 0, "max_steps must be positive");
        Self {
            current_step: 0,
            max_steps,
        }
    }

    /// Advance time by one step
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Get the current step (total steps since start)
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Get the safety cap
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Check whether the step cap has been reached
    ///
    /// # Example
    /// ```
    /// use mobility_simulator_core_rs::core::time::StepCounter;
    ///
    /// let mut steps = StepCounter::new(2);
    /// steps.advance();
    /// steps.advance();
    /// assert!(steps.is_exhausted());
    /// ```
    pub fn is_exhausted(&self) -> bool {
        self.current_step >= self.max_steps
    }
}
